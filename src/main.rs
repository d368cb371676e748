//! Wordle Matrix - CLI
//!
//! Wordle assistant with TUI and CLI modes, ranking guesses by entropy over a
//! precomputed pattern matrix.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_matrix::{
    commands::{
        SolveConfig, analyze_word, best_guesses, parse_history_entry, run_benchmark, run_simple,
        select_targets, solve_word,
    },
    output::{
        print_analysis_result, print_benchmark_result, print_best_result, print_solve_result,
    },
    solver::{BarReporter, Engine, EngineConfig, SearchMode},
    wordlists::loader::load_lists,
};

#[derive(Parser)]
#[command(
    name = "wordle_matrix",
    about = "Wordle assistant ranking guesses by entropy over a precomputed pattern matrix",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search mode: strategic (default, any dictionary word) or greedy (solutions only)
    #[arg(short, long, global = true, default_value = "strategic")]
    mode: SearchMode,

    /// Solution list file, one word per line (default: embedded answers)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Dictionary file, one word per line (default: embedded allowed guesses)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Number of ranked candidates to keep
    #[arg(short, long, global = true)]
    top: Option<usize>,

    /// Remaining count above which strategic search is sampled
    #[arg(long, global = true)]
    sample_threshold: Option<usize>,

    /// Dictionary rows searched when sampling
    #[arg(long, global = true)]
    sample_cap: Option<usize>,

    /// Reject guesses that are not in the dictionary
    #[arg(long, global = true)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Rank the next guess after a history of guess:feedback pairs
    Best {
        /// Entries like crane:--G-Y, in play order
        history: Vec<String>,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Self-play a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy per turn
        #[arg(long)]
        verbose_steps: bool,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of target words to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Sample targets at random instead of taking the first N
        #[arg(short, long)]
        random: bool,

        /// Seed for reproducible sampling (implies --random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let defaults = EngineConfig::default();
        let threshold = self.sample_threshold.unwrap_or(defaults.sample_threshold);
        let cap = self.sample_cap.unwrap_or(defaults.sample_cap);
        let mut config = defaults
            .with_sampling(threshold, cap)
            .with_strict_guesses(self.strict);
        if let Some(top) = self.top {
            config = config.with_top_n(top);
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (solutions, dictionary) = load_lists(cli.answers.as_deref(), cli.dictionary.as_deref())
        .context("failed to load word lists")?;
    let config = cli.engine_config();
    let mode = cli.mode;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(solutions, dictionary, config, mode),
        command => {
            let engine = build_engine(&solutions, &dictionary, config)?;
            run_engine_command(&engine, command, mode)
        }
    }
}

fn run_engine_command(engine: &Engine, command: Commands, mode: SearchMode) -> Result<()> {
    let top = engine.config().top_n;

    match command {
        // Runs on the worker thread instead
        Commands::Play => Ok(()),
        Commands::Simple => run_simple(engine, mode),
        Commands::Best { history } => run_best_command(engine, &history, mode, top),
        Commands::Analyze { word } => {
            let result = analyze_word(engine, &word)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Solve {
            word,
            verbose_steps,
            first_word,
        } => {
            let config = SolveConfig::new(word)
                .with_mode(mode)
                .with_opening(first_word);
            let result = solve_word(engine, config, &mut ())?;
            print_solve_result(&result, verbose_steps);
            Ok(())
        }
        Commands::Benchmark {
            count,
            random,
            seed,
            first_word,
        } => {
            let targets = select_targets(engine.solutions().len(), count, random, seed);
            println!(
                "Running benchmark on {} {} words ({mode} mode)...",
                targets.len(),
                if random || seed.is_some() { "random" } else { "leading" }
            );
            let result = run_benchmark(engine, &targets, mode, first_word.as_deref())?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn build_engine(solutions: &[String], dictionary: &[String], config: EngineConfig) -> Result<Engine> {
    let mut reporter = BarReporter::new();
    let engine = Engine::init(solutions, dictionary, config, &mut reporter)
        .context("failed to build engine")?;
    reporter.finish();
    Ok(engine)
}

fn run_best_command(engine: &Engine, history: &[String], mode: SearchMode, top: usize) -> Result<()> {
    let history = history
        .iter()
        .map(|entry| parse_history_entry(entry))
        .collect::<Result<Vec<_>>>()?;

    let mut reporter = BarReporter::new();
    let result = best_guesses(engine, &history, mode, &mut reporter)?;
    reporter.finish();

    print_best_result(&result, top);
    Ok(())
}

fn run_play_command(
    solutions: Vec<String>,
    dictionary: Vec<String>,
    config: EngineConfig,
    mode: SearchMode,
) -> Result<()> {
    use wordle_matrix::interactive::{App, run_tui};

    let app = App::new(solutions, dictionary, config, mode)?;
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_config_keeps_unset_defaults() {
        let cli = Cli::parse_from(["wordle_matrix", "--sample-cap", "10", "analyze", "crane"]);
        let config = cli.engine_config();
        let defaults = EngineConfig::default();

        assert_eq!(config.sample_cap, 10);
        assert_eq!(config.sample_threshold, defaults.sample_threshold);
        assert_eq!(config.top_n, defaults.top_n);
        assert!(!config.strict_guesses);
    }

    #[test]
    fn engine_config_applies_every_flag() {
        let cli = Cli::parse_from([
            "wordle_matrix",
            "--top",
            "5",
            "--sample-threshold",
            "20",
            "--strict",
            "simple",
        ]);
        let config = cli.engine_config();

        assert_eq!(config.top_n, 5);
        assert_eq!(config.sample_threshold, 20);
        assert_eq!(config.sample_cap, EngineConfig::default().sample_cap);
        assert!(config.strict_guesses);
    }
}
