//! Display functions for command results

use super::formatters::{EntropyQuality, candidate_meta, entropy_bar, pattern_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult, BestResult, SolveResult};
use crate::game::GameStatus;
use crate::solver::{Ranking, SearchMode};
use colored::{ColoredString, Colorize};

fn colored_quality(quality: EntropyQuality) -> ColoredString {
    match quality {
        EntropyQuality::Excellent => quality.label().green(),
        EntropyQuality::Good => quality.label().blue(),
        EntropyQuality::Mediocre => quality.label().yellow(),
        EntropyQuality::Poor => quality.label().red(),
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} mode)",
        result.target.to_uppercase().bright_yellow().bold(),
        result.mode
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        let tag = if step.is_solution { "" } else { " (burner)" };
        println!(
            "\nTurn {}: {} {}{}",
            turn,
            step.word.to_uppercase(),
            pattern_to_emoji(step.pattern),
            tag.bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.raw_entropy {
                println!(
                    "  Entropy:    {entropy:.3} bits ({})",
                    colored_quality(EntropyQuality::from_bits(entropy))
                );
            }
            if step.is_solution {
                println!("  Win chance: {:.1}%", step.win_probability);
            }

            // Information actually gained (reduction in uncertainty)
            if step.candidates_after > 0 && step.candidates_after < step.candidates_before {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {} ({})",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow(),
        colored_quality(result.quality)
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.max_partition);
    if result.is_solution {
        println!("   Direct win:  {:.1}%", result.win_probability);
    } else {
        println!("   Direct win:  {}", "burner (not a possible answer)".bright_black());
    }
}

/// Print a ranking as a numbered table
pub fn print_ranking(ranking: &Ranking, limit: usize) {
    let title = match ranking.mode {
        SearchMode::Strategic => "Top Strategic Moves",
        SearchMode::Greedy => "Top Solutions",
    };
    println!(
        "\n{} ({} guesses searched)",
        title.bright_cyan().bold(),
        ranking.searched_count
    );

    if ranking.is_dead_end() {
        println!("   {}", "No solutions match. Check your feedback patterns.".red());
        return;
    }

    for (i, candidate) in ranking.candidates.iter().take(limit).enumerate() {
        let word = candidate.word.to_uppercase();
        let word = if i == 0 {
            word.bright_yellow().bold()
        } else {
            word.normal()
        };
        let tag = if !candidate.is_solution && ranking.mode == SearchMode::Strategic {
            " BURNER"
        } else {
            ""
        };
        println!(
            "   #{:<3} {word}{} {:>8.3}  {}",
            i + 1,
            tag.bright_black(),
            candidate.entropy,
            candidate_meta(candidate)
        );
    }
}

/// Print the outcome of the best-guess command
pub fn print_best_result(result: &BestResult, limit: usize) {
    match &result.status {
        GameStatus::Solved(word) => {
            println!(
                "\n{} {}",
                "Solution found:".green().bold(),
                word.to_uppercase().bright_yellow().bold()
            );
            return;
        }
        GameStatus::DeadEnd => {
            println!("\n{}", "No solutions match. Check your feedback patterns.".red().bold());
            return;
        }
        GameStatus::InProgress => {}
    }

    println!(
        "\n{} candidates remaining | confidence {}%",
        result.remaining.len(),
        result.confidence
    );
    if result.remaining.len() <= 10 {
        println!("   {}", result.remaining.join(", ").to_uppercase());
    }
    print_ranking(&result.ranking, limit);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Mode:             {}", result.mode);
    println!("   Opening:          {}", result.opening.to_uppercase());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=6 {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} {}",
            "Failed:".red().bold(),
            result.failures.join(", ").to_uppercase()
        );
    }
}
