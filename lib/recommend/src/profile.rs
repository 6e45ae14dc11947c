//! Learner profile and derived skill estimation
//!
//! The profile arrives as JSON from the questionnaire flow. Every field is
//! optional and every malformed value degrades to a documented default, so
//! one bad answer never aborts a recommendation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// Self-assessed or advisor-assessed proficiency band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillBand {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillBand {
    /// Lenient parse; anything unrecognized reads as Beginner
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "beginner" => SkillBand::Beginner,
            "intermediate" => SkillBand::Intermediate,
            "advanced" => SkillBand::Advanced,
            other => {
                warn!(band = other, "unrecognized skill band, defaulting to beginner");
                SkillBand::Beginner
            }
        }
    }
}

/// Weekly study-time commitment band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoursBand {
    Under2,
    From2To4,
    From5To7,
    From8To12,
    Over13,
}

impl HoursBand {
    /// Lenient parse of the questionnaire band labels; unknown input maps
    /// to the 2-4h default bucket
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "<2h" => HoursBand::Under2,
            "2\u{2013}4h" | "2-4h" => HoursBand::From2To4,
            "5\u{2013}7h" | "5-7h" => HoursBand::From5To7,
            "8\u{2013}12h" | "8-12h" => HoursBand::From8To12,
            "13+h" => HoursBand::Over13,
            _ => HoursBand::From2To4,
        }
    }

    /// Ordered bucket 0..=4 feeding the time-budget scoring rule
    #[inline]
    #[must_use]
    pub fn bucket(&self) -> u8 {
        match self {
            HoursBand::Under2 => 0,
            HoursBand::From2To4 => 1,
            HoursBand::From5To7 => 2,
            HoursBand::From8To12 => 3,
            HoursBand::Over13 => 4,
        }
    }
}

/// Stated learning goal, parsed from the questionnaire's free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    BuildProjects,
    CareerSwitch,
    GetFoundations,
    PassClass,
    ResearchPrep,
    Other,
}

impl Goal {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "build projects" => Goal::BuildProjects,
            "career switch" => Goal::CareerSwitch,
            "get foundations" => Goal::GetFoundations,
            "pass a class" => Goal::PassClass,
            "research prep" => Goal::ResearchPrep,
            _ => Goal::Other,
        }
    }
}

/// Correctness flags from the quick-check quiz questions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct QuickCheck {
    #[serde(default)]
    pub math: bool,
    #[serde(default)]
    pub cs: bool,
    #[serde(default)]
    pub data: bool,
}

/// Derived skill axes, each clamped to [0, 4]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEstimate {
    pub math: u8,
    pub programming: u8,
    pub study: u8,
}

const SKILL_AXIS_MAX: u8 = 4;

/// Read one self-rating leniently: integers pass through, numeric strings
/// parse, everything else is 0
fn parse_rating(value: Option<&Value>) -> u8 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => match s.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                warn!(rating = s.as_str(), "unparsable self-rating, defaulting to 0");
                0
            }
        },
        _ => 0,
    };
    raw.clamp(0, SKILL_AXIS_MAX as i64) as u8
}

impl SkillEstimate {
    /// Derive the three axes from self-ratings plus quick-check boosts
    ///
    /// Each correct quick-check adds one level to its axis (math -> math,
    /// cs -> programming, data -> study); the result is re-clamped.
    #[must_use]
    pub fn from_answers(self_ratings: &HashMap<String, Value>, quiz: &QuickCheck) -> Self {
        let mut math = parse_rating(self_ratings.get("math"));
        let mut programming = parse_rating(self_ratings.get("programming"));
        let mut study = parse_rating(self_ratings.get("study"));

        if quiz.math {
            math = (math + 1).min(SKILL_AXIS_MAX);
        }
        if quiz.cs {
            programming = (programming + 1).min(SKILL_AXIS_MAX);
        }
        if quiz.data {
            study = (study + 1).min(SKILL_AXIS_MAX);
        }

        Self {
            math,
            programming,
            study,
        }
    }
}

/// Everything known about the learner at recommendation time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearnerProfile {
    #[serde(default)]
    pub interests: Vec<String>,
    /// Top-3 priority interests, ranked by the learner
    #[serde(default, alias = "top3")]
    pub top_interests: Vec<String>,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default, alias = "self")]
    pub self_ratings: HashMap<String, Value>,
    #[serde(default)]
    pub quiz: QuickCheck,
    /// Named skill -> band pairs, e.g. `("Mathematics", "Beginner")`
    #[serde(default)]
    pub skill_levels: Vec<(String, String)>,
    #[serde(default)]
    pub advisor_description: String,
    #[serde(default)]
    pub conversation_transcript: String,
}

impl LearnerProfile {
    /// Priority interests first, then the rest, deduplicated with
    /// first-seen order preserved
    #[must_use]
    pub fn merged_interests(&self) -> Vec<String> {
        let mut seen = ahash::AHashSet::new();
        self.top_interests
            .iter()
            .chain(self.interests.iter())
            .filter(|tag| seen.insert(tag.as_str()))
            .cloned()
            .collect()
    }

    /// Concatenated free-text context for topic mention scoring
    #[must_use]
    pub fn context_text(&self) -> String {
        let mut text = String::new();
        for part in [&self.advisor_description, &self.conversation_transcript] {
            if !part.is_empty() {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(part);
            }
        }
        text
    }

    #[must_use]
    pub fn estimate(&self) -> SkillEstimate {
        SkillEstimate::from_answers(&self.self_ratings, &self.quiz)
    }

    #[must_use]
    pub fn parsed_goal(&self) -> Goal {
        Goal::parse(&self.goal)
    }

    #[must_use]
    pub fn hours_band(&self) -> HoursBand {
        HoursBand::parse(&self.hours)
    }

    /// Named skills the learner rates at Beginner level
    pub fn beginner_skills(&self) -> impl Iterator<Item = &str> {
        self.skill_levels
            .iter()
            .filter(|(_, band)| SkillBand::parse(band) == SkillBand::Beginner)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skill_band_lenient_parse() {
        assert_eq!(SkillBand::parse(" Advanced "), SkillBand::Advanced);
        assert_eq!(SkillBand::parse("INTERMEDIATE"), SkillBand::Intermediate);
        assert_eq!(SkillBand::parse("wizard"), SkillBand::Beginner);
    }

    #[test]
    fn test_hours_band_buckets() {
        assert_eq!(HoursBand::parse("<2h").bucket(), 0);
        assert_eq!(HoursBand::parse("2\u{2013}4h").bucket(), 1);
        assert_eq!(HoursBand::parse("5-7h").bucket(), 2);
        assert_eq!(HoursBand::parse("8\u{2013}12h").bucket(), 3);
        assert_eq!(HoursBand::parse("13+h").bucket(), 4);
        // Unknown band keeps the original default bucket
        assert_eq!(HoursBand::parse("whenever").bucket(), 1);
    }

    #[test]
    fn test_goal_parse() {
        assert_eq!(Goal::parse("build projects"), Goal::BuildProjects);
        assert_eq!(Goal::parse("Research Prep"), Goal::ResearchPrep);
        assert_eq!(Goal::parse("world domination"), Goal::Other);
    }

    #[test]
    fn test_skill_estimate_with_quiz_boosts() {
        let mut ratings = HashMap::new();
        ratings.insert("math".to_string(), json!(2));
        ratings.insert("programming".to_string(), json!(3));
        ratings.insert("study".to_string(), json!(1));
        let quiz = QuickCheck {
            math: true,
            cs: true,
            data: true,
        };
        let estimate = SkillEstimate::from_answers(&ratings, &quiz);
        assert_eq!(
            estimate,
            SkillEstimate {
                math: 3,
                programming: 4,
                study: 2
            }
        );
    }

    #[test]
    fn test_skill_estimate_clamps_and_defaults() {
        let mut ratings = HashMap::new();
        ratings.insert("math".to_string(), json!(99));
        ratings.insert("programming".to_string(), json!("not a number"));
        ratings.insert("study".to_string(), json!("3"));
        let quiz = QuickCheck {
            math: true,
            ..QuickCheck::default()
        };
        let estimate = SkillEstimate::from_answers(&ratings, &quiz);
        assert_eq!(estimate.math, 4);
        assert_eq!(estimate.programming, 0);
        assert_eq!(estimate.study, 3);
    }

    #[test]
    fn test_merged_interests_dedup_preserves_order() {
        let profile = LearnerProfile {
            interests: vec!["cs".into(), "ml".into(), "art".into()],
            top_interests: vec!["ml".into(), "data".into()],
            ..LearnerProfile::default()
        };
        assert_eq!(profile.merged_interests(), vec!["ml", "data", "cs", "art"]);
    }

    #[test]
    fn test_profile_deserializes_from_questionnaire_payload() {
        let profile: LearnerProfile = serde_json::from_value(json!({
            "interests": ["ml", "data", "cs"],
            "top3": ["ml", "data", "cs"],
            "goal": "build projects",
            "hours": "5\u{2013}7h",
            "self": {"math": 2, "programming": 3, "study": 1},
            "quiz": {"math": true, "data": true, "cs": true},
            "skill_levels": [["Mathematics", "Beginner"], ["Programming", "Intermediate"]]
        }))
        .unwrap();

        assert_eq!(profile.parsed_goal(), Goal::BuildProjects);
        assert_eq!(profile.hours_band().bucket(), 2);
        assert_eq!(
            profile.beginner_skills().collect::<Vec<_>>(),
            vec!["Mathematics"]
        );
    }

    #[test]
    fn test_context_text_concatenates_present_fields() {
        let profile = LearnerProfile {
            advisor_description: "Strong interest in AI.".into(),
            conversation_transcript: String::new(),
            ..LearnerProfile::default()
        };
        assert_eq!(profile.context_text(), "Strong interest in AI.");
    }
}
