use crate::{Result, SeoError};
use serde::Serialize;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// JSON formatter for score reports and audits
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        to_json(value, &self.config)
    }
}

/// Serialize a report, audit or article document to JSON
pub fn to_json<T: Serialize>(value: &T, config: &JsonConfig) -> Result<String> {
    let json = if config.pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    json.map_err(|e| SeoError::SerializeError(e.to_string()))
}
