pub mod audit;
pub mod document;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod import;
pub mod parse;
pub mod preprocess;
pub mod report;
pub mod scorer;
pub mod stats;
pub mod text;

#[cfg(feature = "fetch")]
pub use audit::fetch_and_audit;
pub use audit::{AuditReport, PageSignals, audit_html};
pub use document::{ArticleDocument, FaqItem, InternalLinkSuggestion, Section, Source, SourceType, Subsection, TocEntry};
pub use error::{Result, SeoError};
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{fetch_file, fetch_stdin};
pub use formatters::{JsonConfig, JsonFormatter, MarkdownConfig, MarkdownFormatter, TextConfig, TextFormatter};
pub use import::{ImportConfig, import_html, slugify};
pub use parse::Document;
#[doc(hidden)]
pub use preprocess::PreprocessConfig;
pub use preprocess::preprocess_html;
pub use report::{Breakdown, Dimension, DimensionScore, NEEDS_IMPROVEMENT_BELOW, ScoreReport};
pub use scorer::{CREDIBLE_DOMAINS, compute_seo_score, is_credible_url};
pub use stats::ScoreStats;
