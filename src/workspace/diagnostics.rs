//! Simulated diagnostics, regenerated on every file open.
//!
//! The output is deliberately noisy: a weighted coin decides whether the
//! opened file gets 0-2 synthetic warnings at all, and line numbers are drawn
//! from a small range. No code path produces errors; the error count exists
//! for display symmetry and stays zero. Randomness comes in through the `Rng`
//! parameter so tests can seed it.

use rand::Rng;

/// Probability that opening a file produces any warnings.
const WARN_PROBABILITY: f64 = 0.4;
/// Upper bound (exclusive) on the warning count.
const MAX_WARNINGS: usize = 3;
/// Upper bound (inclusive) on synthetic line numbers.
const MAX_LINE: usize = 8;

/// Severity of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One simulated problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub line: usize,
}

/// The problems panel state, describing the most recently opened file only.
#[derive(Debug, Default)]
pub struct DiagnosticsState {
    problems: Vec<Diagnostic>,
}

impl DiagnosticsState {
    /// Replace the problem list with freshly generated warnings for `path`.
    pub fn regenerate<R: Rng>(&mut self, path: &str, rng: &mut R) {
        self.problems.clear();
        let count = if rng.gen::<f64>() < WARN_PROBABILITY {
            rng.gen_range(0..MAX_WARNINGS)
        } else {
            0
        };
        for i in 0..count {
            self.problems.push(Diagnostic {
                severity: Severity::Warning,
                message: format!("Potential issue {} in {path}", i + 1),
                file: path.to_string(),
                line: rng.gen_range(1..=MAX_LINE),
            });
        }
    }

    pub fn problems(&self) -> &[Diagnostic] {
        &self.problems
    }

    pub fn warning_count(&self) -> usize {
        self.problems
            .iter()
            .filter(|p| p.severity == Severity::Warning)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.problems
            .iter()
            .filter(|p| p.severity == Severity::Error)
            .count()
    }
}
