//! Named catalog scoring rules
//!
//! The course score is the explicit sum of five pure rules, each recorded
//! separately so a recommendation can always show where its score came
//! from. Courses with no topical overlap with the interest set are filtered
//! out before any rule runs; no amount of goal or time alignment can rescue
//! a course the learner has no interest in.

use crate::profile::{Goal, SkillEstimate};
use mentora_taxonomy::{Course, TopicWeights};

/// Inputs shared by every rule for one scoring pass
#[derive(Debug, Clone)]
pub struct ScoringContext<'a> {
    /// Merged interest set (priority interests first)
    pub interests: &'a [String],
    /// Optional per-topic weights; when present, the breadth rule scales
    /// each overlapping tag by its weight instead of counting it as 1.0
    pub topic_weights: Option<&'a TopicWeights>,
    pub levels: SkillEstimate,
    pub goal: Goal,
    pub hours_bucket: u8,
}

impl<'a> ScoringContext<'a> {
    fn weight_of(&self, tag: &str) -> f32 {
        match self.topic_weights {
            Some(weights) => weights.get(tag),
            None => 1.0,
        }
    }

    fn has_interest(&self, tag: &str) -> bool {
        self.interests.iter().any(|i| i == tag) && self.weight_of(tag) > 0.0
    }
}

/// The ordered rule registry; the course score is the sum of all entries
pub static RULES: &[(&str, fn(&Course, &ScoringContext) -> f32)] = &[
    ("breadth", breadth),
    ("level_alignment", level_alignment),
    ("goal_bonus", goal_bonus),
    ("domain_affinity", domain_affinity),
    ("time_budget", time_budget),
];

/// Rewards breadth of topical overlap: 2.0 per matching tag, scaled by the
/// topic weight when query weights are in play
fn breadth(course: &Course, ctx: &ScoringContext) -> f32 {
    course
        .tags
        .iter()
        .filter(|tag| ctx.has_interest(tag))
        .map(|tag| 2.0 * ctx.weight_of(tag))
        .sum()
}

/// Triangular level-alignment term
///
/// The reference level blends the learner's axes by course category; the
/// bonus peaks at 1.5 for exact alignment and hits zero once the gap
/// reaches 1.5 levels.
fn level_alignment(course: &Course, ctx: &ScoringContext) -> f32 {
    let levels = &ctx.levels;
    let math = levels.math as f32;
    let programming = levels.programming as f32;
    let study = levels.study as f32;

    let reference = if course.has_tag("ml") || course.has_tag("ai") || course.has_tag("nlp") {
        0.5 * math + 0.5 * programming
    } else if course.has_tag("math") {
        math
    } else if course.has_tag("cs") || course.has_tag("web") {
        programming
    } else if course.has_tag("data") || course.has_tag("stats") {
        0.5 * math + 0.5 * study
    } else {
        0.5 * programming + 0.5 * study
    };

    let gap = (course.level as f32 - reference).abs();
    1.5 * (1.0 - gap.min(1.5) / 1.5)
}

/// Fixed bonus when the course sits on the allow-list for the stated goal
fn goal_bonus(course: &Course, ctx: &ScoringContext) -> f32 {
    match ctx.goal {
        Goal::BuildProjects | Goal::CareerSwitch => {
            if matches!(course.id, "ml_projects" | "web_fullstack" | "data_analytics") {
                1.0
            } else {
                0.0
            }
        }
        Goal::GetFoundations | Goal::PassClass => {
            if matches!(course.id, "math_found" | "python_intro" | "lin_alg" | "ds_algo") {
                1.0
            } else {
                0.0
            }
        }
        Goal::ResearchPrep => {
            if matches!(course.id, "nlp_intro" | "lin_alg" | "econ_data") {
                0.7
            } else {
                0.0
            }
        }
        Goal::Other => 0.0,
    }
}

/// Curator override favoring the robotics domain: +1.5 when the learner
/// declares robotics and the course is tagged with it
fn domain_affinity(course: &Course, ctx: &ScoringContext) -> f32 {
    if course.has_tag("robotics") && ctx.interests.iter().any(|i| i == "robotics") {
        1.5
    } else {
        0.0
    }
}

/// Small nudge for learners with more weekly time available
fn time_budget(_course: &Course, ctx: &ScoringContext) -> f32 {
    0.1 * ctx.hours_bucket as f32
}

/// Score one course, or None when it has no topical overlap with the
/// interest set
#[must_use]
pub fn score_course(
    course: &Course,
    ctx: &ScoringContext,
) -> Option<(f32, Vec<(&'static str, f32)>)> {
    if !course.tags.iter().any(|tag| ctx.has_interest(tag)) {
        return None;
    }

    let mut contributions = Vec::with_capacity(RULES.len());
    let mut total = 0.0;
    for (name, rule) in RULES {
        let value = rule(course, ctx);
        contributions.push((*name, value));
        total += value;
    }
    Some((total, contributions))
}
