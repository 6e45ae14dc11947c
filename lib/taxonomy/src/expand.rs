//! Free-text expansion against the topic taxonomy
//!
//! Turns a raw term into per-topic weights in [0, 1]. Each mechanism
//! (exact topic name, dictionary phrase, synonym) max-combines into the
//! running weight rather than summing, so overlapping triggers can never
//! push a topic past 1.0.

use crate::topics::{synonyms_of, topic_index, SYNONYMS, TERM_DICTIONARY, TOPICS};

/// Weight assigned when a synonym keyword matches the term
pub const SYNONYM_WEIGHT: f32 = 0.6;

/// Cap on the free-text context bonus from [`score_text`]
pub const TEXT_BONUS_CAP: f32 = 0.3;

/// Per-topic weights aligned with the canonical topic registry
#[derive(Debug, Clone, PartialEq)]
pub struct TopicWeights {
    weights: [f32; TOPICS.len()],
}

impl Default for TopicWeights {
    fn default() -> Self {
        Self::zero()
    }
}

impl TopicWeights {
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            weights: [0.0; TOPICS.len()],
        }
    }

    /// Weight of a topic; 0.0 for unknown keys
    #[inline]
    #[must_use]
    pub fn get(&self, topic: &str) -> f32 {
        topic_index(topic).map_or(0.0, |i| self.weights[i])
    }

    /// Raise a topic's weight to `weight` if it is higher than the current
    pub fn raise(&mut self, topic: &str, weight: f32) {
        if let Some(i) = topic_index(topic) {
            if weight > self.weights[i] {
                self.weights[i] = weight;
            }
        }
    }

    /// Add `delta` to a topic's weight (used by ranking boosts, not by
    /// expansion itself)
    pub fn add(&mut self, topic: &str, delta: f32) {
        if let Some(i) = topic_index(topic) {
            self.weights[i] += delta;
        }
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> f32 {
        self.weights.iter().copied().fold(0.0, f32::max)
    }

    /// Divide every weight by the maximum observed; no-op when all zero
    pub fn normalize_by_max(&mut self) {
        let max = self.max();
        if max > 0.0 {
            for w in &mut self.weights {
                *w /= max;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        TOPICS.iter().zip(self.weights.iter()).map(|(&t, &w)| (t, w))
    }

    /// Topics sorted descending by weight, ties stable on registry order
    #[must_use]
    pub fn ranked(&self) -> Vec<(&'static str, f32)> {
        let mut pairs: Vec<(&'static str, f32)> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        pairs
    }
}

/// Bidirectional substring match, the fuzziness used throughout expansion
#[inline]
fn loose_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Expand a free-form term into topic weights in [0, 1]
///
/// An empty term yields all-zero weights.
pub fn expand_term(term: &str) -> TopicWeights {
    let mut weights = TopicWeights::zero();
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return weights;
    }

    for topic in TOPICS {
        if term == topic {
            weights.raise(topic, 1.0);
        }
    }

    for (phrase, entries) in TERM_DICTIONARY {
        if loose_match(&term, phrase) {
            for (topic, weight) in *entries {
                weights.raise(topic, *weight);
            }
        }
    }

    for (topic, keywords) in SYNONYMS {
        if keywords.iter().any(|kw| loose_match(&term, kw)) {
            weights.raise(topic, SYNONYM_WEIGHT);
        }
    }

    weights
}

/// Light context bonus for a topic mentioned in free-form text
///
/// Each occurrence of each synonym keyword counts as a hit;
/// bonus = min(0.3, 0.1 x hits).
#[must_use]
pub fn score_text(text: &str, topic: &str) -> f32 {
    let text = text.to_lowercase();
    let hits: usize = synonyms_of(topic)
        .iter()
        .map(|kw| text.matches(kw).count())
        .sum();
    TEXT_BONUS_CAP.min(0.1 * hits as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_is_all_zero() {
        assert!(expand_term("").is_zero());
        assert!(expand_term("   ").is_zero());
    }

    #[test]
    fn test_exact_topic_name_scores_one() {
        let weights = expand_term("ml");
        assert_eq!(weights.get("ml"), 1.0);
    }

    #[test]
    fn test_case_and_whitespace_normalized() {
        let weights = expand_term("  Econometrics ");
        assert_eq!(weights.get("economics"), 1.0);
        assert!((weights.get("stats") - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_dictionary_entry_applies_listed_weights() {
        let weights = expand_term("econometrics");
        assert_eq!(weights.get("economics"), 1.0);
        assert!((weights.get("stats") - 0.9).abs() < 1e-6);
        assert!((weights.get("data") - 0.5).abs() < 1e-6);
        assert_eq!(weights.get("art"), 0.0);
    }

    #[test]
    fn test_synonym_match_scores_weak() {
        let weights = expand_term("calculus");
        assert!((weights.get("math") - SYNONYM_WEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_substring_match_both_directions() {
        // Term contains the phrase
        assert!(expand_term("intro to machine learning course").get("ml") > 0.9);
        // Phrase contains the term
        assert!(expand_term("machine learn").get("ml") > 0.0);
    }

    #[test]
    fn test_weights_never_exceed_one() {
        // Adversarial input triggering every mechanism at once
        let mut everything = String::new();
        for topic in TOPICS {
            everything.push_str(topic);
            everything.push(' ');
            for kw in synonyms_of(topic) {
                everything.push_str(kw);
                everything.push(' ');
            }
        }
        for (phrase, _) in TERM_DICTIONARY {
            everything.push_str(phrase);
            everything.push(' ');
        }

        let weights = expand_term(&everything);
        for (topic, weight) in weights.iter() {
            assert!(weight <= 1.0, "{} exceeded cap: {}", topic, weight);
        }
    }

    #[test]
    fn test_score_text_counts_capped_hits() {
        assert_eq!(score_text("", "ml"), 0.0);
        let one = score_text("I enjoy statistics a lot", "stats");
        assert!((one - 0.1).abs() < 1e-6);
        let many = score_text(
            "regression regression regression probability statistics",
            "stats",
        );
        assert!((many - TEXT_BONUS_CAP).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_by_max() {
        let mut weights = expand_term("econometrics");
        weights.normalize_by_max();
        assert_eq!(weights.get("economics"), 1.0);
        assert!((weights.get("stats") - 0.9).abs() < 1e-6);

        let mut zero = TopicWeights::zero();
        zero.normalize_by_max();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_ranked_descending_and_stable() {
        let ranked = expand_term("econometrics").ranked();
        assert_eq!(ranked[0].0, "economics");
        assert_eq!(ranked[1].0, "stats");
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}
