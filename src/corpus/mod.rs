//! Equation corpora for Numberle
//!
//! Provides the embedded default corpus and loading of custom corpus files.

mod embedded;
pub mod loader;

pub use embedded::{EQUATIONS, EQUATIONS_COUNT};
pub use loader::CorpusError;
