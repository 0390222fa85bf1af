//! Error taxonomy for the artifact store.
//!
//! Three categories matter here:
//! - `NotFound` is expected and recoverable: it is the signal for "first run,
//!   record a baseline" and never surfaces to a caller as a test failure.
//! - `Io` / `Decode` / `Encode` are environment failures: the fixture
//!   directory itself is broken, so callers abort loudly with the path.
//! - Mismatches are not errors at all; they travel through the
//!   [`Reporter`](crate::report::Reporter) as test failures.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by [`ArtifactStore`](crate::store::ArtifactStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No artifact exists under the requested name. Expected on first runs.
    #[error("no artifact at {path}")]
    NotFound { path: PathBuf },

    /// Filesystem operation failed for a reason other than absence.
    #[error("artifact I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact exists but does not hold valid JSON of the requested shape.
    #[error("failed to decode artifact at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized for storage.
    #[error("failed to encode artifact for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// True for the recoverable first-run case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
