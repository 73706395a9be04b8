//! Aggregate score statistics for the article dashboard.

use serde::{Deserialize, Serialize};

use crate::report::ScoreReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub total_articles: usize,
    /// Mean percentage over scored articles, rounded half to even.
    pub avg_seo_score: u32,
    /// Scored articles below [`NEEDS_IMPROVEMENT_BELOW`](crate::report::NEEDS_IMPROVEMENT_BELOW).
    pub needs_improvement: usize,
}

impl ScoreStats {
    /// Aggregates the latest score snapshot of every article. Articles
    /// that were never scored count towards `total_articles` only.
    pub fn from_reports<'a>(reports: impl IntoIterator<Item = Option<&'a ScoreReport>>) -> Self {
        let mut total_articles = 0;
        let mut scored = 0u64;
        let mut sum = 0u64;
        let mut needs_improvement = 0;

        for report in reports {
            total_articles += 1;
            if let Some(report) = report {
                scored += 1;
                sum += u64::from(report.percentage);
                if report.needs_improvement() {
                    needs_improvement += 1;
                }
            }
        }

        let avg_seo_score = if scored == 0 { 0 } else { (sum as f64 / scored as f64).round_ties_even() as u32 };

        Self { total_articles, avg_seo_score, needs_improvement }
    }
}
