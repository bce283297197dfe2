//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, entropy_bar, keyboard_lines};
use crate::commands::{AnalysisResult, BenchmarkResult, QueryResult, SolveResult};
use crate::core::{Feedback, LetterStates, Word};
use crate::session::MAX_GUESSES;
use crate::solver::Suggestion;
use colored::Colorize;

/// Print one scored guess
pub fn print_score(feedback: &Feedback) {
    println!(
        "\n  {}  {}  {}",
        colored_tiles(feedback.guess(), feedback.pattern()),
        feedback.pattern().to_emoji(),
        feedback.pattern().key().bright_black()
    );
    println!();
}

/// Print ranked suggestions with bars relative to the best one
pub fn print_suggestions(suggestions: &[Suggestion]) {
    let Some(best) = suggestions.first() else {
        return;
    };

    println!("\n💡 {}", "Top suggestions:".bright_cyan().bold());
    for (i, suggestion) in suggestions.iter().enumerate() {
        let bar = create_progress_bar(suggestion.score, best.score, 20);
        println!(
            "   {:>2}. {}  [{}] {}",
            i + 1,
            suggestion.word.as_str().to_uppercase().bright_white().bold(),
            bar.green(),
            format!("{:.3} bits", suggestion.score).bright_yellow()
        );
    }
}

/// Print up to `limit` candidate words
pub fn print_candidates(candidates: &[Word], limit: usize) {
    if candidates.is_empty() {
        return;
    }

    let shown: Vec<String> = candidates
        .iter()
        .take(limit)
        .map(|w| w.as_str().to_uppercase())
        .collect();
    let more = candidates.len().saturating_sub(limit);

    println!("\n📋 {}", "Candidates:".bright_cyan().bold());
    println!("   {}", shown.join(" "));
    if more > 0 {
        println!("   {}", format!("... and {more} more").bright_black());
    }
}

/// Print the keyboard colored by what each letter is known to be
pub fn print_keyboard(letters: &LetterStates) {
    println!();
    for line in keyboard_lines(letters) {
        println!("   {line}");
    }
}

/// Print the result of a filter or suggest query
pub fn print_query_result(result: &QueryResult, show_suggestions: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    for feedback in &result.history {
        println!(
            "  {}  {}",
            colored_tiles(feedback.guess(), feedback.pattern()),
            feedback.pattern().to_emoji()
        );
    }
    if !result.history.is_empty() {
        println!("{}", "═".repeat(60).cyan());
    }

    let remaining = result.candidates.len();
    match remaining {
        0 => println!(
            "\n{}",
            "❌ No candidates match this history. Check the feedback.".red()
        ),
        1 => println!(
            "\n{} {}",
            "✅ Solution:".green().bold(),
            result.candidates.as_slice()[0]
                .as_str()
                .to_uppercase()
                .bright_yellow()
                .bold()
        ),
        n => {
            println!("\n📊 {n} candidates remaining");
            print_candidates(result.candidates.as_slice(), 20);
        }
    }

    if show_suggestions {
        print_suggestions(&result.suggestions);
    }
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
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

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates ({} patterns)",
        result.max_partition,
        result.partitions.len()
    );

    println!("\n🧩 {}", "Largest partitions:".bright_cyan().bold());
    for (pattern, count) in result.partitions.iter().take(10) {
        let bar = create_progress_bar(*count as f64, result.max_partition as f64, 20);
        println!("   {}  [{}] {count}", pattern.to_emoji(), bar.blue());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let success_rate = if result.total_words > 0 {
        result.solved as f64 / result.total_words as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Success rate:     {success_rate:.1}%");
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_GUESSES {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if result.total_words > 0 {
            count as f64 / result.total_words as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failed_words.is_empty() {
        println!(
            "\n❌ {} ({}):",
            "Failed".red().bold(),
            result.failed_words.len()
        );
        for chunk in result.failed_words.chunks(10) {
            println!("   {}", chunk.join(" ").to_uppercase());
        }
    }
}
