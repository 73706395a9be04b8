mod echo;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use seoscore_core::{
    ArticleDocument, AuditReport, FetchConfig, ImportConfig, JsonConfig, JsonFormatter, MarkdownConfig,
    MarkdownFormatter, ScoreReport, TextConfig, TextFormatter, compute_seo_score, fetch_and_audit, fetch_file,
    fetch_stdin, import_html,
};
use url::Url;

use crate::echo::{
    format_size, print_banner, print_detail, print_score, print_step, print_success, print_warning,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for score reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Invalid format: {}. Valid options: text, json, markdown", s)),
        }
    }
}

/// Score the on-page SEO of Polish accounting articles
#[derive(Parser, Debug)]
#[command(name = "seoscore")]
#[command(version)]
#[command(about = "Score the on-page SEO of Polish accounting articles", long_about = None)]
struct Args {
    /// Article JSON, saved HTML page, URL to audit, or "-" for JSON on stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// Primary keyword
    #[arg(short, long, value_name = "KEYWORD", required_unless_present = "completions")]
    keyword: Option<String>,

    /// Secondary keywords, comma separated
    #[arg(short, long, value_name = "KEYWORDS", value_delimiter = ',')]
    secondary: Vec<String>,

    /// Output format (text, json, markdown)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Exit with an error when the score is below PCT percent
    #[arg(long, value_name = "PCT", value_parser = clap::value_parser!(u32).range(0..=100))]
    fail_under: Option<u32>,

    /// Leave recommendations out of the report
    #[arg(long)]
    no_recommendations: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Print progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

/// Where the article comes from
#[derive(Debug, PartialEq)]
enum Input {
    Stdin,
    Url(String),
    HtmlFile(PathBuf),
    JsonFile(PathBuf),
}

impl Input {
    fn detect(input: &str) -> Self {
        if input == "-" {
            return Self::Stdin;
        }
        if let Ok(url) = Url::parse(input)
            && matches!(url.scheme(), "http" | "https")
        {
            return Self::Url(input.to_string());
        }

        let path = PathBuf::from(input);
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("html" | "htm") => Self::HtmlFile(path),
            _ => Self::JsonFile(path),
        }
    }
}

/// A scored article, or a scored page when the input was a URL
enum Outcome {
    Report(ScoreReport),
    Audit(AuditReport),
}

impl Outcome {
    fn report(&self) -> &ScoreReport {
        match self {
            Outcome::Report(report) => report,
            Outcome::Audit(audit) => &audit.score,
        }
    }
}

const STEPS: usize = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "seoscore", &mut io::stdout());
        return Ok(());
    }

    let (Some(input), Some(keyword)) = (args.input.as_deref(), args.keyword.as_deref()) else {
        bail!("INPUT and --keyword are required");
    };

    if args.verbose {
        print_banner();
    }

    let outcome = match Input::detect(input) {
        Input::Url(url) => {
            if args.verbose {
                print_step(1, STEPS, &format!("Auditing {}", url.bright_white().underline()));
            }
            let config = FetchConfig {
                timeout: args.timeout,
                user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
            };
            let audit = fetch_and_audit(&url, keyword, &args.secondary, &config)
                .await
                .with_context(|| format!("Failed to audit {}", url))?;
            if args.verbose {
                print_detail("Words on page", audit.signals.word_count);
            }
            Outcome::Audit(audit)
        }
        Input::HtmlFile(path) => {
            if args.verbose {
                print_step(1, STEPS, &format!("Importing page {}", path.display().bright_white()));
            }
            let html = read_file(&path, args.verbose)?;
            let article = import_html(&html, &ImportConfig::default())
                .with_context(|| format!("Failed to import article from {}", path.display()))?;
            if args.verbose && article.sections.is_empty() {
                print_warning("No H2 sections found in the page");
            }
            Outcome::Report(score(&article, keyword, &args.secondary, args.verbose))
        }
        Input::JsonFile(path) => {
            if args.verbose {
                print_step(1, STEPS, &format!("Reading article {}", path.display().bright_white()));
            }
            let json = read_file(&path, args.verbose)?;
            let article = ArticleDocument::from_json(&json)
                .with_context(|| format!("Failed to decode article from {}", path.display()))?;
            Outcome::Report(score(&article, keyword, &args.secondary, args.verbose))
        }
        Input::Stdin => {
            if args.verbose {
                print_step(1, STEPS, "Reading article from stdin");
            }
            let json = fetch_stdin().context("Failed to read from stdin")?;
            let article = ArticleDocument::from_json(&json).context("Failed to decode article from stdin")?;
            Outcome::Report(score(&article, keyword, &args.secondary, args.verbose))
        }
    };

    if args.verbose {
        print_step(2, STEPS, "Scoring");
        print_score(outcome.report());
        eprintln!();
    }

    let mut output = render(&outcome, &args)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    if args.verbose {
        print_step(3, STEPS, "Writing output");
        print_detail("Format", format!("{:?}", args.format));
        eprintln!();
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            if args.verbose {
                print_success(&format!("Report written to {}", path.display().bright_white()));
            }
        }
        None => print!("{}", output),
    }

    let percentage = outcome.report().percentage;
    if let Some(threshold) = args.fail_under
        && percentage < threshold
    {
        bail!("Score {}% is below the required {}% (--fail-under)", percentage, threshold);
    }

    Ok(())
}

fn read_file(path: &Path, verbose: bool) -> anyhow::Result<String> {
    let content = fetch_file(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    if verbose {
        print_detail("Size", format_size(content.len()));
    }
    Ok(content)
}

fn score(article: &ArticleDocument, keyword: &str, secondary: &[String], verbose: bool) -> ScoreReport {
    if verbose && !article.title.is_empty() {
        print_detail("Title", &article.title);
    }
    compute_seo_score(article, keyword, secondary)
}

fn render(outcome: &Outcome, args: &Args) -> anyhow::Result<String> {
    let include_recommendations = !args.no_recommendations;

    let rendered = match args.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(TextConfig { include_recommendations, ..Default::default() });
            match outcome {
                Outcome::Report(report) => formatter.format(report),
                Outcome::Audit(audit) => formatter.format_audit(audit),
            }
        }
        OutputFormat::Markdown => {
            let formatter =
                MarkdownFormatter::new(MarkdownConfig { include_checklist: include_recommendations, ..Default::default() });
            match outcome {
                Outcome::Report(report) => formatter.format(report),
                Outcome::Audit(audit) => formatter.format_audit(audit),
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(JsonConfig { pretty: true });
            let json = match outcome {
                Outcome::Report(report) => formatter.format(report),
                Outcome::Audit(audit) => formatter.format(audit),
            };
            json.context("Failed to render JSON")?
        }
    };

    Ok(rendered)
}
