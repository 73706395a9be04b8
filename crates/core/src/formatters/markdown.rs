use crate::audit::AuditReport;
use crate::report::ScoreReport;

/// Configuration for Markdown reports
#[derive(Debug, Clone)]
pub struct MarkdownConfig {
    /// Heading used for the report, omitted when `None`
    pub title: Option<String>,
    /// Append recommendations as a task list
    pub include_checklist: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { title: Some("Raport SEO".to_string()), include_checklist: true }
    }
}

/// Render a score report as a Markdown table with a checklist
pub fn report_to_markdown(report: &ScoreReport, config: &MarkdownConfig) -> String {
    let mut output = String::new();

    if let Some(title) = &config.title {
        output.push_str(&format!("# {}\n\n", title));
    }

    output.push_str(&format!(
        "**Wynik:** {}/{} ({}%)\n\n",
        report.total_score, report.total_max, report.percentage
    ));
    output.push_str(&generate_breakdown_table(report));

    if config.include_checklist {
        output.push_str("\n## Rekomendacje\n\n");
        if report.recommendations.is_empty() {
            output.push_str("Brak rekomendacji.\n");
        }
        for rec in &report.recommendations {
            output.push_str(&format!("- [ ] {}\n", rec));
        }
    }

    output
}

/// Render an audit with a short list of page signals above the report
pub fn audit_to_markdown(audit: &AuditReport, config: &MarkdownConfig) -> String {
    let signals = &audit.signals;
    let check = |flag: bool| if flag { "x" } else { " " };

    let mut output = String::new();
    if let Some(title) = &config.title {
        output.push_str(&format!("# {}\n\n", title));
    }
    output.push_str(&format!("<{}>\n\n", audit.url));
    output.push_str(&format!("- [{}] SSL\n", check(signals.has_ssl)));
    output.push_str(&format!("- [{}] Schema.org\n", check(signals.has_schema)));
    output.push_str(&format!("- [{}] Open Graph\n", check(signals.has_open_graph)));
    output.push_str(&format!("- [{}] Canonical\n", check(signals.canonical.is_some())));
    output.push_str(&format!(
        "- Obrazki bez alt: {} z {}\n\n",
        signals.images_without_alt,
        signals.images_total()
    ));

    output.push_str(&report_to_markdown(&audit.score, &MarkdownConfig { title: None, ..config.clone() }));
    output
}

fn generate_breakdown_table(report: &ScoreReport) -> String {
    let mut table = String::from("| Kryterium | Punkty | Maks. |\n");
    table.push_str("|-----------|-------:|------:|\n");

    for (_, score) in report.iter() {
        table.push_str(&format!("| {} | {} | {} |\n", escape_pipe(&score.label), score.score, score.max));
    }

    table
}

/// Escape pipe characters for Markdown tables
fn escape_pipe(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Markdown formatter with configurable options
pub struct MarkdownFormatter {
    config: MarkdownConfig,
}

impl MarkdownFormatter {
    pub fn new(config: MarkdownConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, report: &ScoreReport) -> String {
        report_to_markdown(report, &self.config)
    }

    pub fn format_audit(&self, audit: &AuditReport) -> String {
        audit_to_markdown(audit, &self.config)
    }
}
