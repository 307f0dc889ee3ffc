//! Numberle equation representation
//!
//! An Equation stores 7 symbols drawn from the Numberle alphabet. It says nothing
//! about arithmetic validity; that is the job of [`crate::rules::validate`].

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of symbols in every equation
pub const EQUATION_LENGTH: usize = 7;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Every symbol a player can type, in on-screen keyboard order
pub const ALPHABET: &[u8; 15] = b"0123456789+-*/=";

/// Arithmetic operators (the `=` sign is not one of them)
pub const OPERATORS: &[u8; 4] = b"+-*/";

/// Check whether a character belongs to the Numberle alphabet
#[inline]
#[must_use]
pub fn is_symbol(ch: char) -> bool {
    ch.is_ascii() && ALPHABET.contains(&(ch as u8))
}

/// Check whether a character is one of `+ - * /`
#[inline]
#[must_use]
pub fn is_operator(ch: char) -> bool {
    ch.is_ascii() && OPERATORS.contains(&(ch as u8))
}

/// A 7-symbol Numberle equation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    text: String,
    chars: [u8; EQUATION_LENGTH],
}

/// Error type for malformed equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EquationError {
    #[error("equation must be exactly {EQUATION_LENGTH} symbols, got {0}")]
    InvalidLength(usize),
    #[error("equation contains illegal character '{0}'")]
    InvalidCharacter(char),
}

impl Equation {
    /// Create a new Equation from a string
    ///
    /// # Errors
    /// Returns `EquationError` if:
    /// - Length is not exactly 7
    /// - Contains a character outside `0-9 + - * / =`
    ///
    /// # Examples
    /// ```
    /// use numberle::core::Equation;
    ///
    /// let equation = Equation::new("1+2+3=6").unwrap();
    /// assert_eq!(equation.text(), "1+2+3=6");
    ///
    /// assert!(Equation::new("1+1=2").is_err());
    /// assert!(Equation::new("1^1+1=2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, EquationError> {
        let text: String = text.into();

        let len = text.chars().count();
        if len != EQUATION_LENGTH {
            return Err(EquationError::InvalidLength(len));
        }

        if let Some(bad) = text.chars().find(|&c| !is_symbol(c)) {
            return Err(EquationError::InvalidCharacter(bad));
        }

        // All symbols are ASCII, so the byte length equals the char count
        let mut chars = [0u8; EQUATION_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the equation as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; EQUATION_LENGTH] {
        &self.chars
    }

    /// Get the symbol at a specific position (0-6)
    ///
    /// # Panics
    /// Panics if position >= 7
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the equation contains a specific symbol
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.chars.contains(&symbol)
    }

    /// Get the count of each symbol in the equation
    ///
    /// Used by feedback calculation for duplicate handling.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equation_creation_valid() {
        let equation = Equation::new("12+3=15").unwrap();
        assert_eq!(equation.text(), "12+3=15");
        assert_eq!(equation.chars(), b"12+3=15");
    }

    #[test]
    fn equation_creation_invalid_length() {
        assert_eq!(Equation::new("1+1=2"), Err(EquationError::InvalidLength(5)));
        assert_eq!(
            Equation::new("12+34=46"),
            Err(EquationError::InvalidLength(8))
        );
        assert_eq!(Equation::new(""), Err(EquationError::InvalidLength(0)));
    }

    #[test]
    fn equation_length_counts_characters_not_bytes() {
        // Six symbols plus one multi-byte character
        assert_eq!(
            Equation::new("1+1=2×3"),
            Err(EquationError::InvalidCharacter('×'))
        );
    }

    #[test]
    fn equation_creation_invalid_characters() {
        assert_eq!(
            Equation::new("1^1+1=2"),
            Err(EquationError::InvalidCharacter('^'))
        );
        assert!(Equation::new("1 1+1=2").is_err()); // Space
        assert!(Equation::new("a+b+c=6").is_err()); // Letters
    }

    #[test]
    fn equation_does_not_require_arithmetic_sense() {
        // Shape only: validity is checked elsewhere
        assert!(Equation::new("=======").is_ok());
    }

    #[test]
    fn equation_char_at() {
        let equation = Equation::new("1+2+3=6").unwrap();
        assert_eq!(equation.char_at(0), b'1');
        assert_eq!(equation.char_at(1), b'+');
        assert_eq!(equation.char_at(5), b'=');
        assert_eq!(equation.char_at(6), b'6');
    }

    #[test]
    fn equation_contains() {
        let equation = Equation::new("1+2+3=6").unwrap();
        assert!(equation.contains(b'+'));
        assert!(equation.contains(b'='));
        assert!(!equation.contains(b'-'));
        assert!(!equation.contains(b'9'));
    }

    #[test]
    fn equation_char_counts() {
        let equation = Equation::new("1+2+3=6").unwrap();
        let counts = equation.char_counts();
        assert_eq!(counts.get(&b'+'), Some(&2));
        assert_eq!(counts.get(&b'1'), Some(&1));
        assert_eq!(counts.get(&b'='), Some(&1));
        assert_eq!(counts.get(&b'9'), None);
        assert_eq!(counts.len(), 6);
    }

    #[test]
    fn symbol_classification() {
        assert!(is_symbol('7'));
        assert!(is_symbol('='));
        assert!(!is_symbol('^'));
        assert!(!is_symbol('x'));

        assert!(is_operator('/'));
        assert!(!is_operator('='));
        assert!(!is_operator('5'));
    }

    #[test]
    fn equation_display() {
        let equation = Equation::new("8/4*4=8").unwrap();
        assert_eq!(format!("{equation}"), "8/4*4=8");
    }
}
