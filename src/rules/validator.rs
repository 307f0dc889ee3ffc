//! Guess validation
//!
//! A guess is accepted only if it passes every rule below, checked in order.
//! The first failing rule decides the reported error.
//!
//! 1. exactly 7 symbols
//! 2. contains `=`
//! 3. contains at least one of `+ - * /`
//! 4. no two operators side by side
//! 5. only `0-9 + - * / =`
//! 6. both sides of the first `=` evaluate, to the same value

use super::evaluator::evaluate;
use crate::core::{EQUATION_LENGTH, Equation, is_operator};
use thiserror::Error;
use tracing::debug;

/// Why a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("length must be 7")]
    InvalidLength,
    #[error("missing '=' sign")]
    MissingEquals,
    #[error("must contain at least one operator")]
    MissingOperator,
    #[error("consecutive operators not allowed")]
    ConsecutiveOperators,
    #[error("illegal character")]
    IllegalCharacter,
    #[error("calculation error")]
    CalculationError,
    #[error("sides not equal")]
    SidesNotEqual,
}

/// Validate a raw guess and return it as an [`Equation`]
///
/// Any `=` after the first one stays in the right-hand side, where it cannot be
/// evaluated, so such guesses fail with [`ValidationError::CalculationError`].
///
/// # Errors
///
/// Returns the first [`ValidationError`] whose rule the input breaks.
///
/// # Examples
/// ```
/// use numberle::rules::{ValidationError, validate};
///
/// assert!(validate("1+2+3=6").is_ok());
/// assert!(validate("8/0=9/0").is_ok());
///
/// assert_eq!(validate("1+1=2"), Err(ValidationError::InvalidLength));
/// assert_eq!(validate("1+1+1=4"), Err(ValidationError::SidesNotEqual));
/// ```
pub fn validate(input: &str) -> Result<Equation, ValidationError> {
    if input.chars().count() != EQUATION_LENGTH {
        return Err(ValidationError::InvalidLength);
    }

    if !input.contains('=') {
        return Err(ValidationError::MissingEquals);
    }

    if !input.chars().any(is_operator) {
        return Err(ValidationError::MissingOperator);
    }

    let adjacent_operators = input
        .chars()
        .zip(input.chars().skip(1))
        .any(|(a, b)| is_operator(a) && is_operator(b));
    if adjacent_operators {
        return Err(ValidationError::ConsecutiveOperators);
    }

    // Length is already known to be right, so only the alphabet can fail here
    let equation = Equation::new(input).map_err(|_| ValidationError::IllegalCharacter)?;

    let (left, right) = input
        .split_once('=')
        .ok_or(ValidationError::MissingEquals)?;

    let sides = evaluate(left).and_then(|l| evaluate(right).map(|r| (l, r)));
    match sides {
        Ok((l, r)) if l == r => Ok(equation),
        Ok((l, r)) => {
            debug!(input, left = l, right = r, "sides differ");
            Err(ValidationError::SidesNotEqual)
        }
        Err(err) => {
            debug!(input, error = %err, "evaluation failed");
            Err(ValidationError::CalculationError)
        }
    }
}
