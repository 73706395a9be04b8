//! Article document model consumed by the scorer.
//!
//! Every field of [`ArticleDocument`] defaults to its empty value, so partially
//! generated or imported articles can always be scored. Decoding happens at
//! the boundary through [`ArticleDocument::from_json`]: `null` and missing
//! fields become empty, while values of the wrong type are rejected with
//! [`SeoError::InvalidDocument`].
//!
//! # Example
//!
//! ```rust
//! use seoscore_core::ArticleDocument;
//!
//! let article = ArticleDocument::from_json(r#"{"title": "Jak rozliczać VAT", "faq": null}"#).unwrap();
//! assert_eq!(article.title, "Jak rozliczać VAT");
//! assert!(article.faq.is_empty());
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Result, SeoError};

/// A generated or imported blog article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleDocument {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,

    #[serde(default, deserialize_with = "nullable")]
    pub meta_description: String,

    /// H2 sections in reading order.
    #[serde(default, deserialize_with = "nullable")]
    pub sections: Vec<Section>,

    #[serde(default, deserialize_with = "nullable")]
    pub faq: Vec<FaqItem>,

    /// Table of contents entries pointing at section anchors.
    #[serde(default, deserialize_with = "nullable")]
    pub toc: Vec<TocEntry>,

    #[serde(default, deserialize_with = "nullable")]
    pub sources: Vec<Source>,

    #[serde(default, deserialize_with = "nullable")]
    pub internal_link_suggestions: Vec<InternalLinkSuggestion>,
}

/// An H2 section with optional H3 subsections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "nullable")]
    pub heading: String,

    /// Fragment identifier without the leading `#`.
    #[serde(default, deserialize_with = "nullable")]
    pub anchor: String,

    /// Section body as HTML.
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,

    #[serde(default, deserialize_with = "nullable")]
    pub subsections: Vec<Subsection>,
}

/// An H3 subsection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    #[serde(default, deserialize_with = "nullable")]
    pub heading: String,

    #[serde(default, deserialize_with = "nullable")]
    pub anchor: String,

    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    #[serde(default, deserialize_with = "nullable")]
    pub question: String,

    #[serde(default, deserialize_with = "nullable")]
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TocEntry {
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,

    #[serde(default, deserialize_with = "nullable")]
    pub anchor: String,
}

/// A cited reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable")]
    pub url: String,

    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: SourceType,
}

/// Kind of a cited reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Statutes and regulations.
    Legal,
    /// Government or institutional pages.
    Official,
    /// Expert commentary.
    Expert,
    /// Anything else, including values this version does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A suggested link to another article of the same blog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalLinkSuggestion {
    #[serde(default, deserialize_with = "nullable")]
    pub anchor_text: String,

    #[serde(default, deserialize_with = "nullable")]
    pub target_topic: String,

    #[serde(default, deserialize_with = "nullable")]
    pub reason: String,
}

impl ArticleDocument {
    /// Decodes an article from a JSON string.
    ///
    /// Unknown fields (ids, timestamps, a previous `seo_score`) are ignored so a
    /// full stored record can be passed in directly.
    ///
    /// # Errors
    ///
    /// Returns [`SeoError::InvalidDocument`] if the input is not JSON or a
    /// field holds a value of the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SeoError::from)
    }

    /// Decodes an article from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(SeoError::InvalidDocument("expected a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(SeoError::from)
    }

    /// Number of H2 headings.
    pub fn h2_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of H3 headings across all sections.
    pub fn h3_count(&self) -> usize {
        self.sections.iter().map(|s| s.subsections.len()).sum()
    }

    /// Section and subsection bodies in reading order.
    pub fn content_blocks(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().flat_map(|section| {
            std::iter::once(section.content.as_str()).chain(section.subsections.iter().map(|sub| sub.content.as_str()))
        })
    }

    /// True when the article carries no title and no body content at all.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.content_blocks().all(|c| c.trim().is_empty()) && self.faq.is_empty()
    }
}

/// Treats an explicit `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
