//! Numberle
//!
//! Guess a hidden 7-symbol equation such as `1+2+3=6` in six tries. Each guess
//! must itself be a balanced equation; feedback marks every symbol Green
//! (right place), Orange (wrong place) or Grey (absent).
//!
//! # Quick Start
//!
//! ```rust
//! use numberle::core::{Equation, FeedbackRow};
//! use numberle::rules::validate;
//!
//! let guess = validate("1+1-2=0").unwrap();
//! let target = Equation::new("1+2+3=6").unwrap();
//!
//! let row = FeedbackRow::calculate(&guess, &target);
//! println!("{}", row.to_emoji());
//! ```

// Core domain types
pub mod core;

// Validation and expression evaluation
pub mod rules;

// Game session state
pub mod game;

// Equation corpora
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
