//! Reporting sinks for recorder outcomes.
//!
//! The recorder never prints or panics on its own; it hands every outcome to
//! an injected [`Reporter`]. The default [`PanicReporter`] turns a mismatch
//! into a panic so the enclosing libtest case fails while the rest of the run
//! continues. [`BufferReporter`] captures messages for programmatic
//! inspection, and [`ConsoleReporter`] writes colored output to stderr.

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

// ============================================================================
// REPORTER SINKS
// ============================================================================

/// Receives recorder outcomes: baseline recordings and comparison failures.
pub trait Reporter {
    /// A comparison against the baseline failed. `message` includes the diff.
    fn failure(&mut self, name: &str, message: &str);

    /// A baseline was recorded for the first time.
    fn recorded(&mut self, name: &str) {
        let _ = name;
    }
}

/// Default sink: panics on failure so the enclosing test case fails.
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn failure(&mut self, name: &str, message: &str) {
        panic!("golden mismatch for '{name}':\n{message}");
    }

    fn recorded(&mut self, name: &str) {
        eprintln!("recorded new baseline '{name}'");
    }
}

/// Capturing sink: collects messages into memory for inspection.
#[derive(Debug, Default)]
pub struct BufferReporter {
    pub failures: Vec<(String, String)>,
    pub recordings: Vec<String>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl Reporter for BufferReporter {
    fn failure(&mut self, name: &str, message: &str) {
        self.failures.push((name.to_string(), message.to_string()));
    }

    fn recorded(&mut self, name: &str) {
        self.recordings.push(name.to_string());
    }
}

/// Console sink: colored, line-oriented output on stderr.
pub struct ConsoleReporter {
    use_colors: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }

    fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn failure(&mut self, name: &str, message: &str) {
        let mut stderr = StandardStream::stderr(self.color_choice());
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        eprintln!("FAIL {name}");
        let _ = stderr.reset();
        eprintln!("{message}");
    }

    fn recorded(&mut self, name: &str) {
        let mut stderr = StandardStream::stderr(self.color_choice());
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        eprintln!("RECORDED {name}");
        let _ = stderr.reset();
    }
}

// ============================================================================
// DIFF RENDERING
// ============================================================================

/// Renders a line diff of two texts with `-`/`+` prefixes for removed and
/// added lines and a leading space for unchanged ones.
pub fn render_diff(expected: &str, actual: &str) -> String {
    let changeset = Changeset::new(expected, actual, "\n");
    let mut out = String::new();
    for diff in &changeset.diffs {
        let (prefix, text) = match diff {
            Difference::Same(x) => (' ', x),
            Difference::Add(x) => ('+', x),
            Difference::Rem(x) => ('-', x),
        };
        for line in text.lines() {
            out.push(prefix);
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_diff_marks_added_and_removed_lines() {
        let diff = render_diff("a\nb\nc", "a\nx\nc");
        assert!(diff.contains(" a"));
        assert!(diff.contains("-b"));
        assert!(diff.contains("+x"));
        assert!(diff.contains(" c"));
    }

    #[test]
    fn render_diff_of_identical_texts_has_no_markers() {
        let diff = render_diff("same", "same");
        assert!(!diff.contains('+'));
        assert!(!diff.contains('-'));
    }

    #[test]
    fn console_reporter_survives_both_outcomes() {
        // Output goes to stderr; this only checks nothing panics without a tty.
        let mut reporter = ConsoleReporter::new();
        reporter.recorded("alpha");
        reporter.failure("alpha", "-expected\n+got\n");
    }

    #[test]
    fn buffer_reporter_captures_outcomes() {
        let mut reporter = BufferReporter::new();
        reporter.recorded("alpha");
        reporter.failure("beta", "boom");
        assert_eq!(reporter.recordings, vec!["alpha"]);
        assert!(reporter.failed());
        assert_eq!(reporter.failures[0].0, "beta");
    }
}
