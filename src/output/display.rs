//! Display functions for command results

use super::formatters::{colorize_guess, symbol_list};
use crate::commands::{AuditReport, CheckResult};
use crate::core::OPERATORS;
use crate::game::GameSession;
use colored::Colorize;

/// Print the result of checking one equation
pub fn print_check_result(result: &CheckResult) {
    match &result.outcome {
        Ok(equation) => println!("{} {}", "✅ valid:".green().bold(), equation),
        Err(err) => println!(
            "{} {} ({})",
            "❌ invalid:".red().bold(),
            result.input,
            err.to_string().yellow()
        ),
    }
}

/// Print the hints for the latest guess of a session
pub fn print_turn_hints(session: &GameSession) {
    let Some((guess, row)) = session.history().last() else {
        return;
    };

    println!("Hints:");
    println!("  {}   {}", colorize_guess(guess, row), row.to_emoji());
    println!(
        "  {} right place  {} wrong place  {} not in the equation",
        "Green".green().bold(),
        "Orange".truecolor(255, 135, 0).bold(),
        "Grey".bright_black()
    );
    println!(
        "You have not used these numbers and symbols yet: {}",
        symbol_list(&session.unused_chars())
    );
}

/// Print the result of a corpus audit
pub fn print_audit_result(result: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CORPUS AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Equations:        {}", result.total);
    println!(
        "   Valid:            {}",
        format!("{}", result.valid).green().bold()
    );
    println!(
        "   Invalid:          {}",
        if result.is_clean() {
            "0".green()
        } else {
            format!("{}", result.failures.len()).red().bold()
        }
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Equations/second: {:.0}", result.equations_per_second);

    println!("\n📈 {}", "Operator usage:".bright_cyan().bold());
    for &op in OPERATORS {
        let op = char::from(op);
        let count = result.operator_usage.get(&op).copied().unwrap_or(0);
        let pct = if result.total > 0 {
            count as f64 / result.total as f64 * 100.0
        } else {
            0.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {op}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.is_clean() {
        println!("\n❌ {}", "Invalid entries:".red().bold());
        for (equation, err) in &result.failures {
            println!("   {} ({})", equation.bright_white().bold(), err);
        }
    }
}
