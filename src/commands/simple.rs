//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use crate::core::Pattern;
use crate::game::{GameSession, GameStatus};
use crate::output::formatters::{EntropyQuality, candidate_meta, pattern_to_emoji};
use crate::solver::{BarReporter, Engine, SearchMode};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// engine rejects a request.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(engine: &Engine, mode: SearchMode) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Matrix - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Each turn I rank guesses by expected information (entropy).");
    println!("Enter the word you played (Enter accepts the suggestion), then its feedback:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'mode' to switch strategic/greedy\n");

    let mut session = GameSession::for_engine(engine);
    session.set_mode(mode);

    loop {
        match session.status() {
            GameStatus::DeadEnd => {
                println!("\n❌ No candidates remain! Your feedback may be incorrect.\n");
                if !ask_new_game(&mut session)? {
                    return Ok(());
                }
                continue;
            }
            GameStatus::Solved(word) => {
                print_solved(&session, &word);
                if !ask_new_game(&mut session)? {
                    return Ok(());
                }
                continue;
            }
            GameStatus::InProgress => {}
        }

        if session.needs_ranking() {
            let mut reporter = BarReporter::new();
            session.refresh_ranking(engine, &mut reporter)?;
            reporter.finish();
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {} candidates remaining ({}) | mode: {} | confidence {}%",
            session.guesses().len() + 1,
            session.candidates().len(),
            session.remaining_label(),
            session.mode(),
            session.confidence()
        );
        println!("────────────────────────────────────────────────────────────");

        print_suggestions(&session);

        // Get the played word
        let guess = loop {
            let input = get_user_input("Guess")?.to_lowercase();
            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    session.reset();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "mode" | "m" => {
                    session.toggle_mode();
                    println!("Mode: {}\n", session.mode());
                    break None;
                }
                "" => match session.best_move() {
                    Some(best) => break Some(best.to_string()),
                    None => println!("No suggestion available yet.\n"),
                },
                word => match session.submit_guess(word) {
                    Ok(()) => break Some(word.to_string()),
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        let Some(guess) = guess else {
            continue;
        };
        if session.pending_guess().is_none() {
            session.submit_guess(&guess)?;
        }

        // Get feedback
        let pattern = loop {
            let input = get_user_input(&format!("Feedback for {}", guess.to_uppercase()))?
                .to_lowercase();
            match input.as_str() {
                "win" | "correct" | "yes" | "solved" => break Pattern::PERFECT,
                _ => {
                    if let Some(pattern) = Pattern::from_str(&input) {
                        break pattern;
                    }
                    println!("❌ Invalid pattern! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n");
                }
            }
        };

        let remaining = session.enter_feedback(engine, pattern)?;
        println!("  {} {} → {remaining} left\n", guess.to_uppercase(), pattern_to_emoji(pattern));

        if pattern.is_perfect() {
            print_solved(&session, &guess);
            if !ask_new_game(&mut session)? {
                return Ok(());
            }
        }
    }
}

fn print_suggestions(session: &GameSession) {
    if let Some(best) = session.best_move() {
        println!("\n📊 Suggested guess: {}", best.to_uppercase().bright_yellow().bold());
    }

    for (i, candidate) in session.visible_candidates().iter().take(5).enumerate() {
        let quality = EntropyQuality::from_bits(candidate.raw_entropy);
        let tag = if candidate.is_solution { "" } else { " BURNER" };
        println!(
            "   {}. {}{} ({}, {quality})",
            i + 1,
            candidate.word.to_uppercase(),
            tag.bright_black(),
            candidate_meta(candidate)
        );
    }

    let endgame = session.endgame();
    if !endgame.is_empty() {
        println!("\n{} remaining solutions:", endgame.len());
        for entry in &endgame {
            println!(
                "  • {} ({:.1}% if guessed)",
                entry.word.to_uppercase(),
                entry.win_probability
            );
        }
    }
    println!();
}

fn print_solved(session: &GameSession, word: &str) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        format!("    🎉  Solution: {}  🎉", word.to_uppercase())
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!("\n  Guess history:");
    for (i, entry) in session.guesses().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            entry.word.to_uppercase().bright_white().bold(),
            entry.feedback.map(pattern_to_emoji).unwrap_or_default()
        );
    }
    println!();
}

fn ask_new_game(session: &mut GameSession) -> Result<bool> {
    match get_user_input("Play again? (yes/no)")?
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => {
            session.reset();
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
