//! Score report produced by [`compute_seo_score`](crate::compute_seo_score).
//!
//! A report has no identity. It is recomputed on every scoring call and the
//! caller keeps only the most recent one as a snapshot on the article.

use serde::{Deserialize, Serialize};

/// Articles scoring below this percentage are flagged as needing improvement.
pub const NEEDS_IMPROVEMENT_BELOW: u32 = 70;

/// The ten scoring dimensions in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Title,
    MetaDescription,
    ContentLength,
    Headings,
    Keywords,
    Toc,
    Faq,
    InternalLinks,
    Sources,
    Readability,
}

impl Dimension {
    /// All dimensions in evaluation order.
    pub const ALL: [Dimension; 10] = [
        Dimension::Title,
        Dimension::MetaDescription,
        Dimension::ContentLength,
        Dimension::Headings,
        Dimension::Keywords,
        Dimension::Toc,
        Dimension::Faq,
        Dimension::InternalLinks,
        Dimension::Sources,
        Dimension::Readability,
    ];

    /// Key used in the serialized breakdown.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Title => "title",
            Dimension::MetaDescription => "meta_description",
            Dimension::ContentLength => "content_length",
            Dimension::Headings => "headings",
            Dimension::Keywords => "keywords",
            Dimension::Toc => "toc",
            Dimension::Faq => "faq",
            Dimension::InternalLinks => "internal_links",
            Dimension::Sources => "sources",
            Dimension::Readability => "readability",
        }
    }

    /// Maximum points of the dimension. The weights add up to 100.
    pub fn max(self) -> u32 {
        match self {
            Dimension::Title | Dimension::Headings | Dimension::Keywords => 15,
            Dimension::MetaDescription | Dimension::ContentLength | Dimension::Toc | Dimension::Faq => 10,
            Dimension::InternalLinks | Dimension::Sources | Dimension::Readability => 5,
        }
    }
}

/// Points earned in one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: u32,
    pub max: u32,
    /// Polish display label, sometimes carrying a measured value.
    pub label: String,
}

impl DimensionScore {
    pub fn new(dimension: Dimension, score: u32, label: impl Into<String>) -> Self {
        Self { score: score.min(dimension.max()), max: dimension.max(), label: label.into() }
    }
}

/// Per-dimension scores, serialized as an object keyed by [`Dimension::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub title: DimensionScore,
    pub meta_description: DimensionScore,
    pub content_length: DimensionScore,
    pub headings: DimensionScore,
    pub keywords: DimensionScore,
    pub toc: DimensionScore,
    pub faq: DimensionScore,
    pub internal_links: DimensionScore,
    pub sources: DimensionScore,
    pub readability: DimensionScore,
}

impl Breakdown {
    pub fn get(&self, dimension: Dimension) -> &DimensionScore {
        match dimension {
            Dimension::Title => &self.title,
            Dimension::MetaDescription => &self.meta_description,
            Dimension::ContentLength => &self.content_length,
            Dimension::Headings => &self.headings,
            Dimension::Keywords => &self.keywords,
            Dimension::Toc => &self.toc,
            Dimension::Faq => &self.faq,
            Dimension::InternalLinks => &self.internal_links,
            Dimension::Sources => &self.sources,
            Dimension::Readability => &self.readability,
        }
    }

    /// Dimensions with their scores in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &DimensionScore)> {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    pub fn total_score(&self) -> u32 {
        self.iter().map(|(_, s)| s.score).sum()
    }

    pub fn total_max(&self) -> u32 {
        self.iter().map(|(_, s)| s.max).sum()
    }
}

/// Composite SEO score of an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total_score: u32,
    pub total_max: u32,
    /// `total_score / total_max` as a rounded percentage.
    pub percentage: u32,
    pub breakdown: Breakdown,
    /// Polish recommendations in dimension evaluation order.
    pub recommendations: Vec<String>,
    /// Words in section and subsection content.
    pub word_count: usize,
    /// Words in content plus FAQ questions and answers.
    #[serde(default)]
    pub total_word_count: usize,
}

impl ScoreReport {
    /// Builds a report and derives the totals from the breakdown.
    pub fn new(breakdown: Breakdown, recommendations: Vec<String>, word_count: usize, total_word_count: usize) -> Self {
        let total_score = breakdown.total_score();
        let total_max = breakdown.total_max();
        let percentage = percentage(total_score, total_max);

        Self { total_score, total_max, percentage, breakdown, recommendations, word_count, total_word_count }
    }

    /// True when the article falls under the dashboard's quality gate.
    pub fn needs_improvement(&self) -> bool {
        self.percentage < NEEDS_IMPROVEMENT_BELOW
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &DimensionScore)> {
        self.breakdown.iter()
    }
}

/// Rounds half to even, the way the stored percentages were always rounded.
fn percentage(score: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (score as f64 / max as f64 * 100.0).round_ties_even() as u32
}
