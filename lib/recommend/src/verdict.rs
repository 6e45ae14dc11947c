//! Verdict assembly for the questionnaire flow
//!
//! Pure summary of the learner's answers plus the top catalog
//! recommendations. The advisor-narrative polish that may be layered on
//! top is an external text-generation concern, not part of this core.

use crate::profile::{LearnerProfile, SkillEstimate};
use crate::rank::{rank_catalog, ScoredCourse};
use serde::Serialize;

const VERDICT_PICKS: usize = 5;
const PRIMARY_TOPICS: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct VerdictSummary {
    pub primary_topics: Vec<String>,
    pub estimated_levels: SkillEstimate,
    pub study_time: String,
    pub goal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub summary: VerdictSummary,
    pub recommendations: Vec<ScoredCourse>,
}

/// Build the verdict for a completed questionnaire
#[must_use]
pub fn make_verdict(profile: &LearnerProfile) -> Verdict {
    let merged = profile.merged_interests();
    Verdict {
        summary: VerdictSummary {
            primary_topics: merged.into_iter().take(PRIMARY_TOPICS).collect(),
            estimated_levels: profile.estimate(),
            study_time: profile.hours.clone(),
            goal: profile.goal.clone(),
        },
        recommendations: rank_catalog(profile, VERDICT_PICKS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers() -> LearnerProfile {
        serde_json::from_value(json!({
            "interests": ["ml", "data", "cs"],
            "top3": ["ml", "data", "cs"],
            "goal": "build projects",
            "hours": "5\u{2013}7h",
            "self": {"math": 2, "programming": 3, "study": 1},
            "quiz": {"math": true, "data": true, "cs": true}
        }))
        .unwrap()
    }

    #[test]
    fn test_verdict_summary_fields() {
        let verdict = make_verdict(&answers());
        assert_eq!(verdict.summary.primary_topics, vec!["ml", "data", "cs"]);
        assert_eq!(
            verdict.summary.estimated_levels,
            SkillEstimate {
                math: 3,
                programming: 4,
                study: 2
            }
        );
        assert_eq!(verdict.summary.study_time, "5\u{2013}7h");
        assert_eq!(verdict.summary.goal, "build projects");
    }

    #[test]
    fn test_verdict_recommends_at_most_five() {
        let verdict = make_verdict(&answers());
        assert!(!verdict.recommendations.is_empty());
        assert!(verdict.recommendations.len() <= 5);
        for pair in verdict.recommendations.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_verdict_with_empty_answers() {
        let verdict = make_verdict(&LearnerProfile::default());
        assert!(verdict.summary.primary_topics.is_empty());
        assert!(verdict.recommendations.is_empty());
    }

    #[test]
    fn test_verdict_serializes_for_presentation() {
        let json = serde_json::to_value(make_verdict(&answers())).unwrap();
        assert!(json["summary"]["primary_topics"].is_array());
        assert!(json["recommendations"].is_array());
    }
}
