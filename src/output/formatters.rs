//! Formatting utilities for terminal output

use crate::core::{Color, Equation, FeedbackRow};
use colored::{ColoredString, Colorize};

/// Paint a single symbol in its feedback colour
#[must_use]
pub fn paint(symbol: char, color: Color) -> ColoredString {
    let text = symbol.to_string();
    match color {
        Color::Green => text.green().bold(),
        Color::Orange => text.truecolor(255, 135, 0).bold(),
        Color::Grey => text.bright_black(),
    }
}

/// Render a guess with each symbol in its feedback colour
#[must_use]
pub fn colorize_guess(guess: &Equation, row: &FeedbackRow) -> String {
    guess
        .text()
        .chars()
        .zip(row.colors())
        .map(|(symbol, &color)| paint(symbol, color).to_string())
        .collect()
}

/// Join symbols with single spaces, e.g. `3 4 * /`
#[must_use]
pub fn symbol_list(symbols: &[char]) -> String {
    symbols
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Attempt pips: filled for used guesses, hollow for remaining ones
#[must_use]
pub fn attempts_bar(remaining: usize, total: usize) -> String {
    let remaining = remaining.min(total);
    format!("{}{}", "●".repeat(total - remaining), "○".repeat(remaining))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_keeps_symbols_in_order() {
        colored::control::set_override(false);
        let guess = Equation::new("1+1-2=0").unwrap();
        let target = Equation::new("1+2+3=6").unwrap();
        let row = FeedbackRow::calculate(&guess, &target);

        assert_eq!(colorize_guess(&guess, &row), "1+1-2=0");
    }

    #[test]
    fn symbol_list_spacing() {
        assert_eq!(symbol_list(&['3', '*', '/']), "3 * /");
        assert_eq!(symbol_list(&[]), "");
    }

    #[test]
    fn attempts_bar_counts() {
        assert_eq!(attempts_bar(6, 6), "○○○○○○");
        assert_eq!(attempts_bar(4, 6), "●●○○○○");
        assert_eq!(attempts_bar(0, 6), "●●●●●●");
        assert_eq!(attempts_bar(9, 6), "○○○○○○");
    }
}
