//! WordleX - CLI
//!
//! Wordle assistant: scores guesses, filters the possible answers by the
//! feedback so far and ranks next guesses by expected information.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::prelude::IndexedRandom;
use std::path::PathBuf;
use wordlex::{
    commands::{
        SolveConfig, analyze_word, benchmark::sample_targets, parse_history, run_benchmark,
        run_query, run_simple, solve_word,
    },
    core::score_words,
    output::{
        print_analysis_result, print_benchmark_result, print_query_result, print_score,
        print_solve_result,
    },
    solver::{GuessPool, Solver},
    wordlists::{DEFAULT_ALLOWED_PATH, DEFAULT_ANSWERS_PATH, Vocabulary},
};

#[derive(Parser)]
#[command(
    name = "wordlex",
    about = "Wordle assistant ranking guesses by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File of possible answers, one word per line
    #[arg(long, global = true, default_value = DEFAULT_ANSWERS_PATH)]
    answers: PathBuf,

    /// File of allowed guesses, one word per line
    #[arg(long, global = true, default_value = DEFAULT_ALLOWED_PATH)]
    allowed: PathBuf,

    /// Which words are scored as guesses
    #[arg(short, long, global = true, value_enum, default_value_t)]
    pool: GuessPool,

    /// Number of suggestions to show
    #[arg(short, long, global = true, default_value = "10")]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (default - interactive assistant)
    Simple,

    /// Score a guess against a known answer
    Score {
        /// The guessed word
        guess: String,
        /// The hidden answer
        answer: String,
    },

    /// List the answers consistent with a history
    Filter {
        /// Feedback entries as guess:pattern, e.g. crane:-YG-G
        #[arg(short = 'H', long = "history")]
        history: Vec<String>,
    },

    /// Rank next guesses for a history
    Suggest {
        /// Feedback entries as guess:pattern, e.g. crane:-YG-G
        #[arg(short = 'H', long = "history")]
        history: Vec<String>,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,

        /// Feedback entries as guess:pattern applied before analysis
        #[arg(short = 'H', long = "history")]
        history: Vec<String>,
    },

    /// Solve a specific target word (random answer if omitted)
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of answers to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Sample the answers randomly instead of taking the first N
        #[arg(short, long)]
        random: bool,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

fn load_vocabulary(cli: &Cli) -> Result<Vocabulary> {
    let vocabulary = Vocabulary::load(&cli.allowed, &cli.answers).with_context(|| {
        format!(
            "Failed to load word lists ({} and {})",
            cli.allowed.display(),
            cli.answers.display()
        )
    })?;

    if vocabulary.answers.is_empty() {
        anyhow::bail!("No valid words in {}", cli.answers.display());
    }
    Ok(vocabulary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Simple mode if no command given
    let default = Commands::Simple;
    let command = cli.command.as_ref().unwrap_or(&default);

    // Scoring needs no word lists
    if let Commands::Score { guess, answer } = command {
        let feedback = score_words(guess, answer).context("Invalid word")?;
        print_score(&feedback);
        return Ok(());
    }

    let vocabulary = load_vocabulary(&cli)?;
    let solver = Solver::new(cli.pool, &vocabulary.allowed, &vocabulary.answers);

    match command {
        Commands::Score { .. } => Ok(()),
        Commands::Simple => run_simple(&solver, cli.top),
        Commands::Filter { history } => run_query_command(&solver, history, 0),
        Commands::Suggest { history } => run_query_command(&solver, history, cli.top),
        Commands::Analyze { word, history } => {
            let history = parse_history(history).context("Invalid history")?;
            print_analysis_result(&analyze_word(word, &solver, &history)?);
            Ok(())
        }
        Commands::Solve {
            word,
            first_word,
            verbose,
        } => run_solve_command(&solver, word.as_deref(), first_word.as_deref(), *verbose),
        Commands::Benchmark {
            count,
            random,
            first_word,
        } => run_benchmark_command(&solver, *count, *random, first_word.as_deref()),
    }
}

fn run_query_command(solver: &Solver<'_>, history: &[String], top_n: usize) -> Result<()> {
    let history = parse_history(history).context("Invalid history")?;
    print_query_result(&run_query(solver, history, top_n), top_n > 0);
    Ok(())
}

fn run_solve_command(
    solver: &Solver<'_>,
    word: Option<&str>,
    first_word: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let target = match word {
        Some(word) => word.to_string(),
        None => solver
            .answer_words()
            .choose(&mut rand::rng())
            .map(ToString::to_string)
            .context("No answers to pick from")?,
    };

    let mut config = SolveConfig::new(target);
    config.first_guess = first_word.map(str::to_string);

    let result = solve_word(config, solver)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    solver: &Solver<'_>,
    count: usize,
    random: bool,
    first_word: Option<&str>,
) -> Result<()> {
    let targets = sample_targets(solver.answer_words(), count, random);

    if let Some(word) = first_word {
        println!(
            "Running benchmark on {} words with forced first word: {word}...",
            targets.len()
        );
    } else {
        println!(
            "Running benchmark on {} words (pool: {})...",
            targets.len(),
            solver.pool()
        );
    }

    let result = run_benchmark(solver, &targets, first_word, true)?;
    print_benchmark_result(&result);
    Ok(())
}
