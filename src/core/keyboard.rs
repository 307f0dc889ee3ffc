//! Cumulative keyboard colouring
//!
//! Tracks the best colour each symbol has earned across all guesses in a game.

use super::{Color, Equation, FeedbackRow};
use rustc_hash::FxHashMap;

/// Best-known colour per symbol
///
/// Colours only move upwards (`Grey -> Orange -> Green`): once a symbol is
/// Green no later guess can downgrade it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardColors(FxHashMap<u8, Color>);

impl KeyboardColors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess and its feedback into the map
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Color, Equation, FeedbackRow, KeyboardColors};
    ///
    /// let target = Equation::new("1+2+3=6").unwrap();
    /// let guess = Equation::new("1+1-2=0").unwrap();
    /// let mut keyboard = KeyboardColors::new();
    /// keyboard.record(&guess, &FeedbackRow::calculate(&guess, &target));
    ///
    /// // '1' was both Green and Grey in this guess; Green wins
    /// assert_eq!(keyboard.get(b'1'), Some(Color::Green));
    /// assert_eq!(keyboard.get(b'2'), Some(Color::Orange));
    /// assert_eq!(keyboard.get(b'9'), None);
    /// ```
    pub fn record(&mut self, guess: &Equation, row: &FeedbackRow) {
        for (&symbol, &color) in guess.chars().iter().zip(row.colors()) {
            self.0
                .entry(symbol)
                .and_modify(|known| *known = (*known).max(color))
                .or_insert(color);
        }
    }

    /// Colour for a symbol, if it has been guessed
    #[inline]
    #[must_use]
    pub fn get(&self, symbol: u8) -> Option<Color> {
        self.0.get(&symbol).copied()
    }

    /// Iterate over `(symbol, colour)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, Color)> + '_ {
        self.0.iter().map(|(&symbol, &color)| (char::from(symbol), color))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
