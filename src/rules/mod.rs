//! Equation rules
//!
//! Decides whether a raw guess is a well-formed, balanced equation. The
//! expression evaluator is an implementation detail of validation.

pub(crate) mod evaluator;
mod validator;

pub use validator::{ValidationError, validate};
