//! # mentora Recommend
//!
//! Catalog scoring and query ranking on top of the mentora taxonomy.
//!
//! The catalog score is an explicit sum of named rules (breadth,
//! level alignment, goal bonus, domain affinity, time budget), each
//! independently testable and reported per recommendation:
//!
//! - [`LearnerProfile`] - questionnaire answers with lenient parsing
//! - [`rank_catalog`] - order the fixed catalog for a learner
//! - [`QueryRanker`] - free text to ranked topics, explanations, and picks
//! - [`make_verdict`] - questionnaire verdict assembly
//!
//! ## Example
//!
//! ```rust
//! use mentora_recommend::{rank_query, LearnerProfile};
//!
//! let profile: LearnerProfile = serde_json::from_value(serde_json::json!({
//!     "interests": ["economics"]
//! })).unwrap();
//!
//! let ranking = rank_query("econometrics", &profile);
//! assert_eq!(ranking.topics[0].topic, "economics");
//! ```

pub mod explain;
pub mod profile;
pub mod rank;
pub mod rules;
pub mod verdict;

pub use explain::{ExplainedCourse, RankingStats};
pub use profile::{Goal, HoursBand, LearnerProfile, QuickCheck, SkillBand, SkillEstimate};
pub use rank::{rank_catalog, rank_query, QueryRanker, QueryRanking, RankedTopic, ScoredCourse, TopicExplanation};
pub use rules::{score_course, ScoringContext, RULES};
pub use verdict::{make_verdict, Verdict, VerdictSummary};
