//! Explainability for ranked recommendations
//!
//! Presentation-ready structures showing how a score was assembled from
//! the named scoring rules, plus summary statistics over a ranking.

use crate::rank::ScoredCourse;
use serde::Serialize;
use std::collections::BTreeMap;

/// A recommendation with its per-rule score breakdown
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedCourse {
    pub id: &'static str,
    pub title: &'static str,
    pub score: f32,
    /// Rule name -> additive contribution
    pub explain: BTreeMap<&'static str, f32>,
}

impl ExplainedCourse {
    pub fn from_scored(scored: &ScoredCourse) -> Self {
        Self {
            id: scored.course.id,
            title: scored.course.title,
            score: scored.score,
            explain: scored.rule_scores.iter().copied().collect(),
        }
    }

    pub fn from_scored_list(scored: &[ScoredCourse]) -> Vec<Self> {
        scored.iter().map(Self::from_scored).collect()
    }
}

/// Summary statistics for one ranking pass
#[derive(Debug, Clone, Serialize)]
pub struct RankingStats {
    /// Catalog courses considered before the overlap filter
    pub candidates_count: usize,
    pub results_count: usize,
    pub avg_score: f32,
    pub best_score: f32,
    /// Rule contributing most to the best result
    pub top_contributing_rule: Option<&'static str>,
}

impl RankingStats {
    pub fn compute(results: &[ScoredCourse], candidates_count: usize) -> Self {
        if results.is_empty() {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0.0,
                top_contributing_rule: None,
            };
        }

        let scores: Vec<f32> = results.iter().map(|r| r.score).collect();
        let avg_score = scores.iter().sum::<f32>() / scores.len() as f32;
        let best_score = scores[0]; // Results are sorted

        let top_contributing_rule = results[0]
            .rule_scores
            .iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, _)| *name);

        Self {
            candidates_count,
            results_count: results.len(),
            avg_score,
            best_score,
            top_contributing_rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::LearnerProfile;
    use crate::rank::rank_catalog;

    fn ranked() -> Vec<ScoredCourse> {
        let profile = LearnerProfile {
            interests: vec!["ml".into(), "data".into(), "cs".into()],
            goal: "build projects".into(),
            hours: "5-7h".into(),
            ..LearnerProfile::default()
        };
        rank_catalog(&profile, 5)
    }

    #[test]
    fn test_explained_course_breakdown_sums_to_score() {
        let results = ranked();
        let explained = ExplainedCourse::from_scored(&results[0]);
        let sum: f32 = explained.explain.values().sum();
        assert!((sum - explained.score).abs() < 1e-5);
        assert!(explained.explain.contains_key("breadth"));
    }

    #[test]
    fn test_stats_over_ranking() {
        let results = ranked();
        let stats = RankingStats::compute(&results, 11);

        assert_eq!(stats.candidates_count, 11);
        assert_eq!(stats.results_count, results.len());
        assert!((stats.best_score - results[0].score).abs() < 1e-6);
        assert!(stats.top_contributing_rule.is_some());
    }

    #[test]
    fn test_empty_stats() {
        let stats = RankingStats::compute(&[], 11);
        assert_eq!(stats.results_count, 0);
        assert_eq!(stats.best_score, 0.0);
        assert!(stats.top_contributing_rule.is_none());
    }

    #[test]
    fn test_explained_serialization() {
        let results = ranked();
        let json =
            serde_json::to_string(&ExplainedCourse::from_scored_list(&results)).unwrap();
        assert!(json.contains("\"explain\""));
        assert!(json.contains("\"score\""));
    }
}
