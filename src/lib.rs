//! Testkit: golden-file record-or-assert helpers.
//!
//! The core of the crate is [`GoldenRecorder`]: hand it a serializable value
//! under a logical name and it either records the value as the accepted
//! baseline (first run) or compares it against the existing baseline under
//! an order-insensitive JSON canonical form, reporting divergence with a
//! line diff and persisting the divergent value for inspection.
//!
//! Around that sit small, independent helpers: environment lookups
//! ([`env`]), plain file wrappers ([`fileutil`]), date ranges ([`dates`]),
//! and the [`skip_if!`]/[`run_if!`] test gates.

pub use crate::canon::{canonicalize, to_canonical_string, unescape_json};
pub use crate::errors::StoreError;
pub use crate::recorder::{GoldenRecorder, DEFAULT_ROOT};
pub use crate::report::{BufferReporter, ConsoleReporter, PanicReporter, Reporter};
pub use crate::store::ArtifactStore;

pub mod canon;
pub mod dates;
pub mod env;
pub mod errors;
pub mod fileutil;
pub mod gates;
pub mod recorder;
pub mod report;
pub mod store;
