//! Numberle feedback calculation and representation
//!
//! Each guessed symbol receives one of three colours:
//! - Grey: symbol not in the target (or every copy already accounted for)
//! - Orange: symbol in the target, wrong position
//! - Green: symbol in the correct position

use super::{EQUATION_LENGTH, Equation};
use std::fmt;

/// Feedback colour for a single symbol
///
/// Ordered by strength, so `Grey < Orange < Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Grey,
    Orange,
    Green,
}

impl Color {
    /// Display label ("Green", "Orange" or "Grey")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Orange => "Orange",
            Self::Grey => "Grey",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([Color; EQUATION_LENGTH]);

impl FeedbackRow {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Color::Green; EQUATION_LENGTH]);

    /// Create a row from explicit colours
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; EQUATION_LENGTH]) -> Self {
        Self(colors)
    }

    /// Colours in guess order
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; EQUATION_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Duplicate symbols are handled as multisets: a symbol is only Orange while
    /// the target still has an unmatched copy of it.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (greens) and remove from the available pool
    /// 2. Second pass: mark present-but-wrong-position (orange) from the remaining pool
    ///
    /// # Examples
    /// ```
    /// use numberle::core::{Color, Equation, FeedbackRow};
    ///
    /// let guess = Equation::new("1+1-2=0").unwrap();
    /// let target = Equation::new("1+2+3=6").unwrap();
    /// let row = FeedbackRow::calculate(&guess, &target);
    ///
    /// assert_eq!(row.colors()[0], Color::Green);
    /// assert_eq!(row.colors()[2], Color::Grey); // the only '1' is already green
    /// assert_eq!(row.colors()[4], Color::Orange);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Equation, target: &Equation) -> Self {
        if guess == target {
            return Self::PERFECT;
        }

        let mut result: [Option<Color>; EQUATION_LENGTH] = [None; EQUATION_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        for (slot, (&g, &t)) in result
            .iter_mut()
            .zip(guess.chars().iter().zip(target.chars()))
        {
            if g == t {
                *slot = Some(Color::Green);
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: remaining positions, consuming unmatched copies
        for (slot, &g) in result.iter_mut().zip(guess.chars()) {
            if slot.is_some() {
                continue;
            }
            *slot = match target_available.get_mut(&g) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    Some(Color::Orange)
                }
                _ => Some(Color::Grey),
            };
        }

        Self(result.map(|color| color.unwrap_or(Color::Grey)))
    }

    /// Count how many positions carry `color`
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// Parse a row from a string like "GG--OG-" or "🟩🟩⬜⬜🟧🟩⬜"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'O'/'o'/🟧 for orange
    /// - '-'/'_'/⬜ for grey
    ///
    /// # Examples
    /// ```
    /// use numberle::core::FeedbackRow;
    ///
    /// let r1 = FeedbackRow::from_str("GG--OG-").unwrap();
    /// let r2 = FeedbackRow::from_str("🟩🟩⬜⬜🟧🟩⬜").unwrap();
    /// assert_eq!(r1, r2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut colors = [Color::Grey; EQUATION_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            let slot = colors.get_mut(len)?;
            *slot = match ch {
                'G' | 'g' | '🟩' => Color::Green,
                'O' | 'o' | '🟧' => Color::Orange,
                '-' | '_' | '⬜' => Color::Grey,
                _ => return None,
            };
            len += 1;
        }

        (len == EQUATION_LENGTH).then_some(Self(colors))
    }

    /// Convert the row to an emoji string like "🟩🟩⬜⬜🟧🟩⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|color| match color {
                Color::Green => '🟩',
                Color::Orange => '🟧',
                Color::Grey => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for FeedbackRow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
