//! # mentora
//!
//! A deterministic, explainable recommendation core for learning content.
//!
//! mentora combines three signals: user-to-user similarity over declared
//! interests (k-nearest-neighbors in a cosine vector space), multi-factor
//! scoring of a fixed course catalog against a learner profile, and
//! free-text query expansion against a topic taxonomy. A separate graph
//! builder merges course/prerequisite records into a clean roadmap graph
//! for rendering.
//!
//! It is a heuristic scorer, not a learned ranker: every score is the
//! explicit sum of named rules, and every ranking is reproducible for
//! identical input.
//!
//! ## Quick Start
//!
//! ```rust
//! use mentora::prelude::*;
//!
//! // Who studies like u1?
//! let users = vec![
//!     UserInterests::new("u1", vec!["ml".into(), "data".into()]),
//!     UserInterests::new("u2", vec!["ml".into()]),
//!     UserInterests::new("u3", vec!["art".into()]),
//! ];
//! let neighbors = find_neighbors(&UserId::from("u1"), &users, 2).unwrap();
//! assert_eq!(neighbors[0].id, UserId::from("u2"));
//!
//! // What should they study next?
//! let profile: LearnerProfile = serde_json::from_value(serde_json::json!({
//!     "interests": ["economics"],
//! })).unwrap();
//! let ranking = rank_query("econometrics", &profile);
//! assert_eq!(ranking.topics[0].topic, "economics");
//! ```
//!
//! ## Crate Structure
//!
//! mentora is composed of several crates:
//!
//! - [`mentora-core`](https://docs.rs/mentora-core) - interest vector space, neighbor matching, roadmap graphs
//! - [`mentora-taxonomy`](https://docs.rs/mentora-taxonomy) - canonical topics, synonyms, term expansion, catalog
//! - [`mentora-recommend`](https://docs.rs/mentora-recommend) - learner profiles, scoring rules, ranking, verdicts

// Re-export core types
pub use mentora_core::{
    find_neighbors, CourseRecord, Error, InterestSpace, Neighbor, NeighborMatcher, PrereqEdge,
    Result, RoadmapGraph, RoadmapNode, SearchStrategy, UserId, UserInterests, Vector,
};

// Re-export taxonomy
pub use mentora_taxonomy::{expand_term, score_text, Course, TopicWeights, CATALOG, TOPICS};

// Re-export recommendation
pub use mentora_recommend::{
    make_verdict, rank_catalog, rank_query, ExplainedCourse, Goal, HoursBand, LearnerProfile,
    QueryRanker, QueryRanking, RankedTopic, RankingStats, ScoredCourse, SkillBand, SkillEstimate,
    Verdict,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        expand_term, find_neighbors, make_verdict, rank_catalog, rank_query, Course, CourseRecord,
        Error, InterestSpace, LearnerProfile, Neighbor, NeighborMatcher, QueryRanking, Result,
        RoadmapGraph, ScoredCourse, SearchStrategy, UserId, UserInterests, Verdict, CATALOG,
    };
}
