//! Golden-file record-or-assert.
//!
//! A test hands the recorder a serializable value under a logical name. On
//! the first run there is no baseline, so the value is recorded as one and
//! the test passes. On later runs the value is compared against the baseline
//! under the order-insensitive canonical form from [`crate::canon`]:
//!
//! - equal: the test passes, and any stale `{name}_actual.json` left over
//!   from an earlier failing run is deleted;
//! - unequal: the reporter receives a line diff of the two canonical forms,
//!   and the got value is persisted as `{name}_actual.json` so a human can
//!   inspect it and, if correct, promote it over the baseline.
//!
//! Baselines are never overwritten on mismatch. All artifacts live flat under
//! a single root (`testdata` by default), one logical name per call; use
//! [`record_or_assert!`](crate::record_or_assert) to default the name to the
//! invoking function.
//!
//! Failures to create, write, or decode fixture files are not test failures:
//! they mean the fixture environment itself is broken, and the recorder
//! panics with the offending path.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::canon::canonicalize;
use crate::report::{render_diff, PanicReporter, Reporter};
use crate::store::ArtifactStore;

/// Default storage root, relative to the crate under test.
pub const DEFAULT_ROOT: &str = "testdata";

/// Suffix appended to a logical name for the divergent-run artifact.
const ACTUAL_SUFFIX: &str = "_actual";

/// Orchestrates the artifact store and canonicalizer to implement
/// record-or-assert semantics. Generic over the injected [`Reporter`] so
/// tests can substitute a capturing sink.
pub struct GoldenRecorder<R: Reporter = PanicReporter> {
    store: ArtifactStore,
    reporter: R,
}

impl GoldenRecorder<PanicReporter> {
    /// Recorder over the default `testdata` root, panicking on mismatch.
    pub fn new() -> Self {
        Self::in_dir(DEFAULT_ROOT)
    }

    /// Recorder over an explicit root, panicking on mismatch.
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        Self::with_reporter(root, PanicReporter)
    }
}

impl Default for GoldenRecorder<PanicReporter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reporter> GoldenRecorder<R> {
    /// Recorder over an explicit root with an explicit reporting sink.
    pub fn with_reporter(root: impl Into<PathBuf>, reporter: R) -> Self {
        Self {
            store: ArtifactStore::new(root),
            reporter,
        }
    }

    /// The underlying artifact store.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// The injected reporting sink.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Records `got` as the baseline for `name` if none exists, otherwise
    /// asserts that `got` matches the baseline up to canonical form.
    ///
    /// `got` only needs to match the baseline's JSON-observable shape, not
    /// its Rust type: both sides are re-encoded and canonicalized before the
    /// comparison. Numeric literals compare as opaque tokens, so `1.0` and
    /// `1` diverge.
    ///
    /// # Panics
    ///
    /// On any fixture I/O or encoding failure (broken test environment).
    /// The default [`PanicReporter`] additionally panics on mismatch.
    pub fn record_or_assert<T: Serialize>(&mut self, name: &str, got: &T) {
        if let Err(e) = self.store.ensure_root() {
            panic!("cannot prepare fixture directory: {e}");
        }

        let baseline: Value = match self.store.load(name) {
            Ok(value) => value,
            Err(e) if e.is_not_found() => {
                if let Err(e) = self.store.store(name, got) {
                    panic!("cannot record baseline '{name}': {e}");
                }
                self.reporter.recorded(name);
                return;
            }
            Err(e) => panic!("cannot load baseline '{name}': {e}"),
        };

        let expected = canonicalize(baseline);
        let actual = canonicalize(reencode(name, got));
        let actual_name = format!("{name}{ACTUAL_SUFFIX}");

        if expected == actual {
            // A leftover _actual artifact means the previous failure is resolved.
            if let Err(e) = self.store.remove(&actual_name) {
                panic!("cannot remove stale artifact '{actual_name}': {e}");
            }
            return;
        }

        // Persist before reporting: a panicking sink must not lose the artifact.
        if let Err(e) = self.store.store(&actual_name, got) {
            panic!("cannot save divergent artifact '{actual_name}': {e}");
        }
        let message = format!(
            "mismatch against baseline {}:\n{}",
            self.store.path_of(name).display(),
            render_diff(&pretty(&expected), &pretty(&actual)),
        );
        self.reporter.failure(name, &message);
    }
}

/// Re-encodes a Rust value into a JSON tree for comparison.
fn reencode<T: Serialize>(name: &str, value: &T) -> Value {
    match serde_json::to_value(value) {
        Ok(v) => v,
        Err(e) => panic!("cannot encode value for '{name}': {e}"),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Expands to the name of the enclosing function.
///
/// The Rust analogue of walking the caller stack for a test's identity:
/// `std::any::type_name` of a local item carries the full module path of the
/// enclosing function, and the last segment is its name.
#[macro_export]
macro_rules! fn_name {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let full = name_of(here);
        let full = full.strip_suffix("::here").unwrap_or(full);
        match full.rsplit("::").next() {
            Some(last) => last,
            None => full,
        }
    }};
}

/// [`GoldenRecorder::record_or_assert`] with the logical name defaulted to
/// the invoking function's name.
///
/// ```no_run
/// # use testkit::{record_or_assert, GoldenRecorder};
/// #[test]
/// fn widget_totals() {
///     let mut recorder = GoldenRecorder::new();
///     // stored under testdata/widget_totals.json
///     record_or_assert!(recorder, &serde_json::json!({"total": 3}));
/// }
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! record_or_assert {
    ($recorder:expr, $got:expr) => {
        $recorder.record_or_assert($crate::fn_name!(), $got)
    };
    ($recorder:expr, $name:expr, $got:expr) => {
        $recorder.record_or_assert($name, $got)
    };
}
