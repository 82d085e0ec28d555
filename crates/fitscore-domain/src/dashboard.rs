//! Dashboard Sample Metrics
//!
//! Hard-coded demo numbers. The scored, high-fit and hired totals are
//! derived from the buckets and trends so cards and charts agree.

use serde::{Deserialize, Serialize};

/// Buckets whose lower bound is above this count as high fit
pub const HIGH_FIT_THRESHOLD: u8 = 80;

/// Average FitScore over all sample candidates
pub const SAMPLE_AVERAGE_SCORE: f64 = 76.4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBucket {
    pub low: u8,
    pub high: u8,
    pub count: u32,
}

impl ScoreBucket {
    const fn new(low: u8, high: u8, count: u32) -> Self {
        Self { low, high, count }
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.low, self.high)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    pub week: u8,
    pub avg_score: u8,
    pub hired: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardVariant {
    Default,
    Blue,
    Green,
    Purple,
}

impl CardVariant {
    pub fn class(self) -> &'static str {
        match self {
            CardVariant::Default => "summary-card",
            CardVariant::Blue => "summary-card blue",
            CardVariant::Green => "summary-card green",
            CardVariant::Purple => "summary-card purple",
        }
    }
}

/// One headline card; `title` and `subtitle` are catalog keys
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetric {
    pub title: &'static str,
    pub value: String,
    pub subtitle: &'static str,
    pub variant: CardVariant,
}

pub fn score_distribution() -> Vec<ScoreBucket> {
    vec![
        ScoreBucket::new(40, 50, 5),
        ScoreBucket::new(51, 60, 8),
        ScoreBucket::new(61, 70, 15),
        ScoreBucket::new(71, 80, 22),
        ScoreBucket::new(81, 90, 12),
        ScoreBucket::new(91, 100, 6),
    ]
}

pub fn weekly_trends() -> Vec<WeeklyTrend> {
    [(1, 72, 2), (2, 74, 1), (3, 78, 3), (4, 80, 4)]
        .into_iter()
        .map(|(week, avg_score, hired)| WeeklyTrend {
            week,
            avg_score,
            hired,
        })
        .collect()
}

pub fn candidates_scored(buckets: &[ScoreBucket]) -> u32 {
    buckets.iter().map(|b| b.count).sum()
}

pub fn high_fit_candidates(buckets: &[ScoreBucket]) -> u32 {
    buckets
        .iter()
        .filter(|b| b.low > HIGH_FIT_THRESHOLD)
        .map(|b| b.count)
        .sum()
}

pub fn candidates_hired(trends: &[WeeklyTrend]) -> u32 {
    trends.iter().map(|t| t.hired).sum()
}

/// Bar length relative to the largest value, in percent
pub fn bar_percent(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    value as f64 * 100.0 / max as f64
}

pub fn summary_metrics() -> Vec<SummaryMetric> {
    let buckets = score_distribution();
    let trends = weekly_trends();
    vec![
        SummaryMetric {
            title: "dashboard.candidatesScored",
            value: candidates_scored(&buckets).to_string(),
            subtitle: "dashboard.last30days",
            variant: CardVariant::Blue,
        },
        SummaryMetric {
            title: "dashboard.averageFitScore",
            value: format!("{:.1}", SAMPLE_AVERAGE_SCORE),
            subtitle: "dashboard.allCandidates",
            variant: CardVariant::Green,
        },
        SummaryMetric {
            title: "dashboard.highFitCandidates",
            value: high_fit_candidates(&buckets).to_string(),
            subtitle: "dashboard.scoreAbove",
            variant: CardVariant::Purple,
        },
        SummaryMetric {
            title: "dashboard.candidatesHired",
            value: candidates_hired(&trends).to_string(),
            subtitle: "dashboard.last30days",
            variant: CardVariant::Default,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_totals() {
        let buckets = score_distribution();
        assert_eq!(candidates_scored(&buckets), 68);
        assert_eq!(high_fit_candidates(&buckets), 18);
        assert_eq!(candidates_hired(&weekly_trends()), 10);
    }

    #[test]
    fn test_summary_cards() {
        let values: Vec<String> = summary_metrics().into_iter().map(|m| m.value).collect();
        assert_eq!(values, vec!["68", "76.4", "18", "10"]);
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(11, 22), 50.0);
        assert_eq!(bar_percent(3, 0), 0.0);
    }

    #[test]
    fn test_bucket_label() {
        assert_eq!(score_distribution()[5].label(), "91-100");
    }
}
