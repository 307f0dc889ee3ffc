//! Check command
//!
//! Validates a single candidate equation and reports why it is rejected.

use crate::core::Equation;
use crate::rules::{ValidationError, validate};

/// Outcome of checking one equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: String,
    pub outcome: Result<Equation, ValidationError>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Run the validator over `input`
///
/// # Examples
/// ```
/// use numberle::commands::check_equation;
///
/// assert!(check_equation("1+2+3=6").is_valid());
/// assert!(!check_equation("1+2+3=7").is_valid());
/// ```
#[must_use]
pub fn check_equation(input: &str) -> CheckResult {
    CheckResult {
        input: input.to_string(),
        outcome: validate(input),
    }
}
