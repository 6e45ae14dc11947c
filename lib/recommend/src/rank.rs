//! Catalog and query ranking
//!
//! `rank_catalog` orders the fixed catalog against a learner profile.
//! `QueryRanker` interprets a free-text query against the taxonomy,
//! producing normalized topic weights, short explanations, and catalog
//! picks driven by those weights. Both are deterministic: identical inputs
//! produce identical ordered output.

use crate::profile::LearnerProfile;
use crate::rules::{score_course, ScoringContext};
use mentora_taxonomy::{expand_term, score_text, Course, TopicWeights, CATALOG, TOPICS};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;

/// Boost for a query topic the learner declared as an interest
const INTEREST_BOOST: f32 = 0.25;
/// Extra boost when it is one of the top-3 priority interests
const TOP_INTEREST_BOOST: f32 = 0.20;
/// Flat nudge for topics implicated by a beginner-level skill gap
const SKILL_GAP_NUDGE: f32 = 0.1;

const MAX_TOPICS: usize = 10;
const MAX_EXPLANATIONS: usize = 6;
const MAX_PICKS: usize = 5;

/// A catalog course with its score and per-rule contributions
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCourse {
    pub course: &'static Course,
    pub score: f32,
    /// Rule name -> additive contribution, in rule registry order
    pub rule_scores: Vec<(&'static str, f32)>,
}

/// Rank the catalog against a learner profile, highest score first
///
/// Courses with no topical overlap are dropped entirely. Ties keep
/// catalog order (stable sort on an explicit total-order key).
#[must_use]
pub fn rank_catalog(profile: &LearnerProfile, top_n: usize) -> Vec<ScoredCourse> {
    let interests = profile.merged_interests();
    let ctx = ScoringContext {
        interests: &interests,
        topic_weights: None,
        levels: profile.estimate(),
        goal: profile.parsed_goal(),
        hours_bucket: profile.hours_band().bucket(),
    };
    rank_with_context(&ctx, top_n)
}

fn rank_with_context(ctx: &ScoringContext<'_>, top_n: usize) -> Vec<ScoredCourse> {
    let mut scored: Vec<ScoredCourse> = CATALOG
        .iter()
        .filter_map(|course| {
            score_course(course, ctx).map(|(score, rule_scores)| ScoredCourse {
                course,
                score,
                rule_scores,
            })
        })
        .collect();

    scored.sort_by_key(|c| Reverse(OrderedFloat(c.score)));
    scored.truncate(top_n);
    scored
}

/// One ranked topic from a query
#[derive(Debug, Clone, Serialize)]
pub struct RankedTopic {
    pub topic: &'static str,
    pub weight: f32,
}

/// Why a topic scored what it scored
#[derive(Debug, Clone, Serialize)]
pub struct TopicExplanation {
    pub topic: &'static str,
    /// Normalized score rounded to two decimals for presentation
    pub score: f32,
    pub reason: String,
}

/// Full result of interpreting one query for one learner
#[derive(Debug, Clone, Serialize)]
pub struct QueryRanking {
    pub topics: Vec<RankedTopic>,
    pub explanations: Vec<TopicExplanation>,
    pub picks: Vec<ScoredCourse>,
}

/// Interprets free text against the taxonomy for a given learner
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryRanker;

impl QueryRanker {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Rank taxonomy topics for `query` in the learner's context
    pub fn rank(&self, query: &str, profile: &LearnerProfile) -> QueryRanking {
        let mut scores = expand_term(query);
        let mut reasons: Vec<Vec<&'static str>> = vec![Vec::new(); TOPICS.len()];

        for (i, topic) in TOPICS.iter().enumerate() {
            if scores.get(topic) > 0.0 {
                reasons[i].push("matches the query");
            }
        }

        let interests = profile.merged_interests();
        for (i, topic) in TOPICS.iter().enumerate() {
            if interests.iter().any(|t| t == topic) {
                scores.add(topic, INTEREST_BOOST);
                reasons[i].push("declared interest");
            }
            if profile.top_interests.iter().take(3).any(|t| t == topic) {
                scores.add(topic, TOP_INTEREST_BOOST);
                reasons[i].push("priority interest");
            }
        }

        let context = profile.context_text();
        if !context.is_empty() {
            for (i, topic) in TOPICS.iter().enumerate() {
                let bonus = score_text(&context, topic);
                if bonus > 0.0 {
                    scores.add(topic, bonus);
                    reasons[i].push("mentioned in profile");
                }
            }
        }

        for skill in profile.beginner_skills() {
            if let Some(topic) = skill_gap_topic(skill) {
                let i = TOPICS.iter().position(|&t| t == topic).unwrap_or(0);
                if !reasons[i].contains(&"beginner skill gap") {
                    scores.add(topic, SKILL_GAP_NUDGE);
                    reasons[i].push("beginner skill gap");
                }
            }
        }

        scores.normalize_by_max();

        let topics: Vec<RankedTopic> = scores
            .ranked()
            .into_iter()
            .filter(|(_, w)| *w > 0.0)
            .take(MAX_TOPICS)
            .map(|(topic, weight)| RankedTopic { topic, weight })
            .collect();

        let explanations: Vec<TopicExplanation> = topics
            .iter()
            .take(MAX_EXPLANATIONS)
            .map(|ranked| {
                let i = TOPICS
                    .iter()
                    .position(|&t| t == ranked.topic)
                    .unwrap_or(0);
                let reason = if reasons[i].is_empty() {
                    "related to the query".to_string()
                } else {
                    reasons[i].join(", ")
                };
                TopicExplanation {
                    topic: ranked.topic,
                    score: (ranked.weight * 100.0).round() / 100.0,
                    reason,
                }
            })
            .collect();

        let picks = self.pick_courses(&scores, profile);

        QueryRanking {
            topics,
            explanations,
            picks,
        }
    }

    /// Catalog picks driven by the normalized topic weights
    ///
    /// Topics with positive weight act as the interest set, and the breadth
    /// rule scales overlap by weight, so a course on the query's dominant
    /// topic outranks one on a marginal topic.
    fn pick_courses(&self, weights: &TopicWeights, profile: &LearnerProfile) -> Vec<ScoredCourse> {
        let interests: Vec<String> = weights
            .ranked()
            .into_iter()
            .filter(|(_, w)| *w > 0.0)
            .map(|(topic, _)| topic.to_string())
            .collect();

        let ctx = ScoringContext {
            interests: &interests,
            topic_weights: Some(weights),
            levels: profile.estimate(),
            goal: profile.parsed_goal(),
            hours_bucket: profile.hours_band().bucket(),
        };
        rank_with_context(&ctx, MAX_PICKS)
    }
}

/// Topic implicated by a beginner-level named skill, if any
fn skill_gap_topic(skill_name: &str) -> Option<&'static str> {
    let name = skill_name.to_lowercase();
    if name.contains("machine learning") {
        Some("ml")
    } else if name.contains("math") {
        Some("math")
    } else if name.contains("stat") {
        Some("stats")
    } else if name.contains("program") || name.contains("cs") {
        Some("cs")
    } else {
        None
    }
}

/// Convenience wrapper mirroring the query endpoint's shape
pub fn rank_query(query: &str, profile: &LearnerProfile) -> QueryRanking {
    QueryRanker::new().rank(query, profile)
}
