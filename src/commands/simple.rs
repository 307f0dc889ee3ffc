//! Simple interactive CLI mode
//!
//! Line-based Numberle game without the TUI

use crate::core::{EQUATION_LENGTH, MAX_ATTEMPTS};
use crate::game::{GameSession, SessionError};
use crate::output::formatters::attempts_bar;
use crate::output::print_turn_hints;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// game cannot be started.
pub fn run_simple(mut session: GameSession) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Numberle - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden equation in {MAX_ATTEMPTS} tries.");
    println!("Every guess must be a valid equation:\n");
    println!("  1. Use numbers 0-9 and the signs + - * / =");
    println!("  2. Exactly {EQUATION_LENGTH} characters long");
    println!("  3. Exactly one '=' sign, with both sides equal");
    println!("  4. At least one of + - * /, never two in a row");
    println!("  5. No letters or other symbols\n");
    println!("Commands: 'quit' to exit\n");

    session.subscribe(print_turn_hints);

    loop {
        if session.config().show_target {
            println!("Target equation: {}", session.target());
        }

        while !session.is_game_over() {
            println!("────────────────────────────────────────────────────────────");
            println!(
                "Remaining attempts: {} {}",
                session.remaining_attempts(),
                attempts_bar(session.remaining_attempts(), MAX_ATTEMPTS).bright_black()
            );

            let mut prompt = "Please enter your guess";
            let input = loop {
                let input = get_user_input(prompt)?;
                if matches!(input.as_str(), "quit" | "q" | "exit") {
                    println!("\n👋 Bye!\n");
                    return Ok(());
                }
                if session.check_input(&input) {
                    break input;
                }
                if session.config().show_errors
                    && let Some(err) = session.error()
                {
                    println!("❌ {}", err.to_string().red());
                }
                prompt = "Enter your guess again";
            };

            match session.process_input(&input) {
                Ok(()) => {}
                Err(SessionError::GameOver) => break,
                Err(err) => return Err(err.to_string()),
            }
        }

        println!("────────────────────────────────────────────────────────────");
        if session.is_game_won() {
            let used = MAX_ATTEMPTS - session.remaining_attempts();
            println!(
                "\n{} {}",
                "🎉 You won!".bright_green().bold(),
                format!(
                    "Solved in {used} {}",
                    if used == 1 { "guess" } else { "guesses" }
                )
                .bright_white()
            );
        } else {
            println!(
                "\n{} {}",
                "You lost. The answer was:".red().bold(),
                session.target().to_string().bright_yellow().bold()
            );
        }

        match get_user_input("Do you want to play again? (Y/N)")?
            .to_lowercase()
            .as_str()
        {
            "y" | "yes" => {
                session.start_new_game().map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("input closed".to_string());
    }

    Ok(input.trim().to_string())
}
