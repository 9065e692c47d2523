use owo_colors::OwoColorize;
use readmetrics_core::{Metrics, RunSummary};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "readmetrics".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Readability and sentiment metrics for web articles\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

fn print_field(label: &str, value: impl std::fmt::Display) {
    eprintln!("  {:<28} {}", format!("{}:", label).dimmed(), value.to_string().bright_white());
}

/// Print the metric vector of a single article
pub fn print_metrics(metrics: &Metrics) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Article Metrics".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    print_field("Positive score", metrics.positive_score);
    print_field("Negative score", metrics.negative_score);
    print_field("Polarity", format!("{:.6}", metrics.polarity_score));
    print_field("Subjectivity", format!("{:.6}", metrics.subjectivity_score));
    print_field("Avg sentence length", format!("{:.2}", metrics.avg_sentence_length));
    print_field("Complex words", format!("{:.2}%", metrics.percent_complex_words * 100.0));
    print_field("Fog index", format!("{:.2}", metrics.fog_index));
    print_field("Word count", metrics.word_count);
    print_field("Syllables per word", format!("{:.2}", metrics.syllables_per_word));
    print_field("Personal pronouns", metrics.personal_pronouns);
    print_field("Avg word length", format!("{:.2}", metrics.avg_word_length));
    eprintln!();
}

/// Print the outcome of a batch run
pub fn print_run_summary(summary: &RunSummary, elapsed: std::time::Duration) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Run Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    print_field("Processed", summary.processed);
    print_field("Skipped (already done)", summary.skipped);
    if summary.failed > 0 {
        eprintln!("  {:<28} {}", "Failed:".dimmed(), summary.failed.to_string().bright_red());
    } else {
        print_field("Failed", summary.failed);
    }
    print_field("Elapsed", format!("{:.2}s", elapsed.as_secs_f64()));
    eprintln!();
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
