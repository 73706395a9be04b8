//! Request and response bodies.

use serde::{Deserialize, Serialize};
use seoscore_core::{ArticleDocument, FaqItem, InternalLinkSuggestion, Section, Source, TocEntry};
use uuid::Uuid;

use crate::store::{ArticleRecord, ArticleStatus};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub topic: String,
    pub primary_keyword: String,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    #[serde(default)]
    pub article: ArticleDocument,
}

/// Partial update: only the fields present in the body are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticleRequest {
    pub topic: Option<String>,
    pub primary_keyword: Option<String>,
    pub secondary_keywords: Option<Vec<String>>,
    pub status: Option<ArticleStatus>,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub sections: Option<Vec<Section>>,
    pub faq: Option<Vec<FaqItem>>,
    pub toc: Option<Vec<TocEntry>>,
    pub sources: Option<Vec<Source>>,
    pub internal_link_suggestions: Option<Vec<InternalLinkSuggestion>>,
}

impl UpdateArticleRequest {
    pub fn apply(self, record: &mut ArticleRecord) {
        macro_rules! set {
            ($target:expr, $value:expr) => {
                if let Some(value) = $value {
                    $target = value;
                }
            };
        }

        set!(record.topic, self.topic);
        set!(record.primary_keyword, self.primary_keyword);
        set!(record.secondary_keywords, self.secondary_keywords);
        set!(record.status, self.status);
        set!(record.article.title, self.title);
        set!(record.article.meta_description, self.meta_description);
        set!(record.article.sections, self.sections);
        set!(record.article.faq, self.faq);
        set!(record.article.toc, self.toc);
        set!(record.article.sources, self.sources);
        set!(record.article.internal_link_suggestions, self.internal_link_suggestions);
        record.touch();
    }
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub primary_keyword: String,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
}

/// Stateless scoring of an article that is not stored.
#[derive(Debug, Deserialize)]
pub struct ScoreArticleRequest {
    #[serde(default)]
    pub article: ArticleDocument,
    pub primary_keyword: String,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub id: Uuid,
}
