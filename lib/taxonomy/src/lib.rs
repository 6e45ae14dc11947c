//! # mentora Taxonomy
//!
//! The fixed topic taxonomy behind mentora's scoring:
//!
//! - Canonical topic keys with synonym/keyword lists
//! - A term-expansion dictionary mapping phrases to weighted topics
//! - The frozen course catalog
//! - [`expand_term`] / [`score_text`] - free text to topic weights
//!
//! ## Example
//!
//! ```rust
//! use mentora_taxonomy::expand_term;
//!
//! let weights = expand_term("econometrics");
//! assert_eq!(weights.get("economics"), 1.0);
//! assert!(weights.get("stats") > 0.8);
//! ```

pub mod expand;
pub mod topics;

pub use expand::{expand_term, score_text, TopicWeights, SYNONYM_WEIGHT, TEXT_BONUS_CAP};
pub use topics::{synonyms_of, topic_index, Course, CATALOG, SYNONYMS, TERM_DICTIONARY, TOPICS};
