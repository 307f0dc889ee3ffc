//! Audit command
//!
//! Validates every equation in a corpus. A corpus entry that fails
//! validation is a target the player could never type.

use crate::core::{Equation, OPERATORS};
use crate::rules::{ValidationError, validate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of auditing a corpus
#[derive(Debug)]
pub struct AuditReport {
    pub total: usize,
    pub valid: usize,
    pub failures: Vec<(String, ValidationError)>,
    /// Number of equations using each operator at least once
    pub operator_usage: FxHashMap<char, usize>,
    pub duration: Duration,
    pub equations_per_second: f64,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validate all `equations` in parallel
///
/// With `show_progress` a progress bar is drawn on stderr.
#[must_use]
pub fn run_audit(equations: &[Equation], show_progress: bool) -> AuditReport {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(equations.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<(&Equation, Result<Equation, ValidationError>)> = equations
        .par_iter()
        .map(|equation| {
            let outcome = validate(equation.text());
            pb.inc(1);
            (equation, outcome)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut failures = Vec::new();
    for (equation, outcome) in &outcomes {
        if let Err(err) = outcome {
            warn!(%equation, error = %err, "corpus entry fails validation");
            failures.push((equation.text().to_string(), *err));
        }
    }

    let mut operator_usage = FxHashMap::default();
    for &op in OPERATORS {
        let count = equations.iter().filter(|e| e.contains(op)).count();
        operator_usage.insert(char::from(op), count);
    }

    let duration = start.elapsed();
    let total = equations.len();

    AuditReport {
        total,
        valid: total - failures.len(),
        failures,
        operator_usage,
        duration,
        equations_per_second: total as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::EQUATIONS;
    use crate::corpus::loader::equations_from_slice;

    #[test]
    fn embedded_corpus_is_clean() {
        let report = run_audit(&equations_from_slice(EQUATIONS), false);
        assert!(report.is_clean(), "failures: {:?}", report.failures);
        assert_eq!(report.total, EQUATIONS.len());
        assert_eq!(report.valid, report.total);
    }

    #[test]
    fn failures_are_reported_with_reason() {
        let equations = equations_from_slice(&["1+2+3=6", "1+2+3=7", "123=123", "1+1=2=2"]);
        let report = run_audit(&equations, false);

        assert_eq!(report.total, 4);
        assert_eq!(report.valid, 1);
        assert!(!report.is_clean());
        assert!(
            report
                .failures
                .contains(&("1+2+3=7".to_string(), ValidationError::SidesNotEqual))
        );
        assert!(
            report
                .failures
                .contains(&("123=123".to_string(), ValidationError::MissingOperator))
        );
        assert!(
            report
                .failures
                .contains(&("1+1=2=2".to_string(), ValidationError::CalculationError))
        );
    }

    #[test]
    fn counts_operator_usage() {
        let equations = equations_from_slice(&["1+2+3=6", "8/4*4=8", "12+3=15"]);
        let report = run_audit(&equations, false);

        assert_eq!(report.operator_usage.get(&'+'), Some(&2));
        assert_eq!(report.operator_usage.get(&'*'), Some(&1));
        assert_eq!(report.operator_usage.get(&'/'), Some(&1));
        assert_eq!(report.operator_usage.get(&'-'), Some(&0));
    }
}
