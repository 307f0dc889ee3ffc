//! Equation corpus loading utilities
//!
//! A corpus file holds one equation per line. Blank lines are ignored and
//! surrounding whitespace is trimmed; any other malformed line fails the load.

use crate::core::{Equation, EquationError};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading a corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read equation corpus: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: EquationError },
    #[error("equation corpus is empty")]
    Empty,
}

/// Load equations from a file
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read, and the errors of
/// [`parse_corpus`] for bad content.
///
/// # Examples
/// ```no_run
/// use numberle::corpus::loader::load_from_file;
///
/// let equations = load_from_file("data/equations.txt").unwrap();
/// println!("Loaded {} equations", equations.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Equation>, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let equations = parse_corpus(&content)?;
    debug!(path = %path.display(), count = equations.len(), "loaded equation corpus");
    Ok(equations)
}

/// Parse corpus text, one equation per line
///
/// Lines only need the right shape (7 symbols from the alphabet); whether
/// they balance is checked by the `audit` command, not here.
///
/// # Errors
///
/// Returns `CorpusError::Malformed` with the 1-based line number of the first
/// bad line, or `CorpusError::Empty` if no equations remain.
///
/// # Examples
/// ```
/// use numberle::corpus::loader::parse_corpus;
///
/// let equations = parse_corpus("1+2+3=6\n\n12+3=15\n").unwrap();
/// assert_eq!(equations.len(), 2);
///
/// assert!(parse_corpus("1+1=2\n").is_err());
/// ```
pub fn parse_corpus(content: &str) -> Result<Vec<Equation>, CorpusError> {
    let mut equations = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let equation = Equation::new(trimmed).map_err(|reason| CorpusError::Malformed {
            line: idx + 1,
            reason,
        })?;
        if equations.contains(&equation) {
            warn!(line = idx + 1, %equation, "duplicate equation in corpus");
        }
        equations.push(equation);
    }

    if equations.is_empty() {
        return Err(CorpusError::Empty);
    }
    Ok(equations)
}

/// Convert embedded string slice to Equation vector
///
/// # Examples
/// ```
/// use numberle::corpus::loader::equations_from_slice;
/// use numberle::corpus::EQUATIONS;
///
/// let equations = equations_from_slice(EQUATIONS);
/// assert_eq!(equations.len(), EQUATIONS.len());
/// ```
#[must_use]
pub fn equations_from_slice(slice: &[&str]) -> Vec<Equation> {
    slice.iter().filter_map(|&s| Equation::new(s).ok()).collect()
}
