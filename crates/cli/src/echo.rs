use owo_colors::OwoColorize;
use seoscore_core::ScoreReport;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!("\n{} {} {}", "seoscore".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "On-page SEO scoring for accounting articles\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a labelled detail line under a step
pub fn print_detail(label: &str, value: impl std::fmt::Display) {
    eprintln!("  {} {}", format!("{}:", label).dimmed(), value.bright_white());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print the score with a color matching the quality gate
pub fn print_score(report: &ScoreReport) {
    let score = format!("{}% ({}/{})", report.percentage, report.total_score, report.total_max);
    if report.needs_improvement() {
        eprintln!("  {} {}", "Score:".dimmed(), score.bright_red());
    } else {
        eprintln!("  {} {}", "Score:".dimmed(), score.bright_green());
    }
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
