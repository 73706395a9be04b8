use crate::audit::{AuditReport, PageSignals};
use crate::report::ScoreReport;

/// Configuration for plain text reports
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Start with the total score and word counts
    pub include_header: bool,

    /// End with the numbered recommendations
    pub include_recommendations: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { include_header: true, include_recommendations: true }
    }
}

/// Plain text formatter for terminal output
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, report: &ScoreReport) -> String {
        report_to_text(report, &self.config)
    }

    pub fn format_audit(&self, audit: &AuditReport) -> String {
        audit_to_text(audit, &self.config)
    }
}

/// Render a score report as aligned plain text
pub fn report_to_text(report: &ScoreReport, config: &TextConfig) -> String {
    let mut output = String::new();

    if config.include_header {
        output.push_str(&generate_header(report));
        output.push('\n');
    }

    let width = report.iter().map(|(_, s)| s.label.chars().count()).max().unwrap_or(0);
    for (_, score) in report.iter() {
        output.push_str(&format!("{:<width$}  {:>2}/{}\n", score.label, score.score, score.max, width = width));
    }

    if config.include_recommendations && !report.recommendations.is_empty() {
        output.push_str("\nRekomendacje:\n");
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format!("{:>3}. {}\n", i + 1, rec));
        }
    }

    output
}

fn generate_header(report: &ScoreReport) -> String {
    let mut header = format!("Wynik SEO: {}/{} ({}%)\n", report.total_score, report.total_max, report.percentage);
    header.push_str(&format!("Liczba słów: {} (z FAQ: {})\n", report.word_count, report.total_word_count));
    if report.needs_improvement() {
        header.push_str("Status: wymaga poprawy\n");
    }
    header
}

/// Render an audit as page signals followed by the score report
pub fn audit_to_text(audit: &AuditReport, config: &TextConfig) -> String {
    let mut output = format!("Audyt SEO: {}\n\n", audit.url);
    output.push_str(&signals_to_text(&audit.signals));
    output.push('\n');
    output.push_str(&report_to_text(&audit.score, config));
    output
}

fn signals_to_text(signals: &PageSignals) -> String {
    let or_none = |value: &Option<String>| value.clone().unwrap_or_else(|| "brak".to_string());
    let yes_no = |flag: bool| if flag { "tak" } else { "nie" };

    let lines = [
        ("Tytuł", or_none(&signals.title)),
        ("Meta description", or_none(&signals.meta_description)),
        ("H1", join_or_none(&signals.h1)),
        ("H2", join_or_none(&signals.h2)),
        ("Liczba słów", signals.word_count.to_string()),
        ("Obrazki (z alt / bez alt)", format!("{} / {}", signals.images_with_alt, signals.images_without_alt)),
        ("Linki (wewn. / zewn.)", format!("{} / {}", signals.internal_links, signals.external_links)),
        ("SSL", yes_no(signals.has_ssl).to_string()),
        ("Canonical", or_none(&signals.canonical)),
        ("Robots", or_none(&signals.robots)),
        ("Schema.org", yes_no(signals.has_schema).to_string()),
        ("Open Graph", yes_no(signals.has_open_graph).to_string()),
    ];

    lines.iter().map(|(name, value)| format!("{}: {}\n", name, value)).collect()
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() { "brak".to_string() } else { items.join(" | ") }
}
