pub mod json;
pub mod markdown;
pub mod text;

pub use json::{JsonConfig, JsonFormatter, to_json};
pub use markdown::{MarkdownConfig, MarkdownFormatter, audit_to_markdown, report_to_markdown};
pub use text::{TextConfig, TextFormatter, audit_to_text, report_to_text};
