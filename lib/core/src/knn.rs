//! K-nearest-neighbor matching over the interest vector space
//!
//! Two strategies produce the same ranking: a heap-based top-k selection
//! that avoids sorting the whole population, and an exhaustive scan that
//! scores and sorts every row. Rows are unit vectors, so the dot product
//! with the target row is the cosine similarity directly.
//!
//! Ties are broken on input order in both paths. The exhaustive path gets
//! this from the stable sort; the indexed path carries the row index as an
//! explicit secondary heap key.

use crate::error::{Error, Result};
use crate::space::{InterestSpace, UserId, UserInterests};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// A matched user with its cosine similarity to the target, in [-1, 1]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: UserId,
    pub similarity: f32,
}

/// How the matcher selects the top k rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Heap-based top-k selection without a full sort
    Indexed,
    /// Score every row, stable sort descending
    Exhaustive,
}

/// Candidate row in the top-k heap
///
/// Ordered so a max-heap keeps the weakest candidate on top: lower
/// similarity first, later input index breaking ties.
#[derive(Clone, Copy)]
struct Candidate {
    idx: usize,
    sim: f32,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.sim == other.sim && self.idx == other.idx
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .sim
            .partial_cmp(&self.sim)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.idx.cmp(&other.idx))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Matcher configured with a search strategy chosen once at construction
#[derive(Debug, Clone, Copy)]
pub struct NeighborMatcher {
    strategy: SearchStrategy,
}

impl Default for NeighborMatcher {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::Indexed,
        }
    }
}

impl NeighborMatcher {
    #[inline]
    #[must_use]
    pub fn new(strategy: SearchStrategy) -> Self {
        Self { strategy }
    }

    #[inline]
    #[must_use]
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Find up to `k` most similar users to `target`, descending
    ///
    /// The target row is excluded from the result. Fails with
    /// [`Error::UserNotFound`] when `target` is not in the space.
    pub fn find_in_space(
        &self,
        space: &InterestSpace,
        target: &UserId,
        k: usize,
    ) -> Result<Vec<Neighbor>> {
        let target_idx = space
            .position_of(target)
            .ok_or_else(|| Error::UserNotFound(target.to_string()))?;

        if k == 0 || space.len() < 2 {
            return Ok(Vec::new());
        }

        let rows = space.rows();
        let target_row = &rows[target_idx];

        // Populations of fewer than two non-target rows gain nothing from
        // the heap; fall through to the exhaustive scan.
        let strategy = if space.len() <= 2 {
            SearchStrategy::Exhaustive
        } else {
            self.strategy
        };
        debug!(?strategy, population = space.len(), k, "neighbor search");

        let ranked = match strategy {
            SearchStrategy::Indexed => {
                // k can be anything the caller likes; never reserve more
                // than the population can fill.
                let mut heap: BinaryHeap<Candidate> =
                    BinaryHeap::with_capacity(k.min(space.len()) + 1);
                for (idx, row) in rows.iter().enumerate() {
                    if idx == target_idx {
                        continue;
                    }
                    let candidate = Candidate {
                        idx,
                        sim: row.dot(target_row),
                    };
                    if heap.len() < k {
                        heap.push(candidate);
                    } else if let Some(&worst) = heap.peek() {
                        if candidate.cmp(&worst) == Ordering::Less {
                            heap.pop();
                            heap.push(candidate);
                        }
                    }
                }
                heap.into_sorted_vec()
            }
            SearchStrategy::Exhaustive => {
                let mut scored: Vec<Candidate> = rows
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| idx != target_idx)
                    .map(|(idx, row)| Candidate {
                        idx,
                        sim: row.dot(target_row),
                    })
                    .collect();
                scored.sort();
                scored.truncate(k);
                scored
            }
        };

        let ids = space.ids();
        Ok(ranked
            .into_iter()
            .map(|c| Neighbor {
                id: ids[c.idx].clone(),
                similarity: c.sim,
            })
            .collect())
    }
}

/// Build the space for `users` and find the `k` nearest neighbors of `target`
///
/// Convenience entry point rebuilding vocabulary and matrix per call.
pub fn find_neighbors(target: &UserId, users: &[UserInterests], k: usize) -> Result<Vec<Neighbor>> {
    let space = InterestSpace::build(users);
    NeighborMatcher::default().find_in_space(&space, target, k)
}
