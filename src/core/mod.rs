//! Core domain types for Numberle
//!
//! This module contains the fundamental domain types: equations, per-guess feedback
//! and the cumulative keyboard colouring. Everything here is pure and deterministic.

mod equation;
mod feedback;
mod keyboard;

pub use equation::{
    ALPHABET, EQUATION_LENGTH, Equation, EquationError, MAX_ATTEMPTS, OPERATORS, is_operator,
    is_symbol,
};
pub use feedback::{Color, FeedbackRow};
pub use keyboard::KeyboardColors;
