//! Interest vector space
//!
//! Converts a population of users' interest-tag sets into a sparse binary,
//! row-normalized vector space. The vocabulary (basis) is derived from the
//! observed tags and rebuilt on every call - the population is small enough
//! that recomputation beats keeping a persisted index fresh.

use crate::vector::Vector;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Identifier of a user as handed over by the storage collaborator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    String(String),
    Uuid(Uuid),
    Integer(u64),
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserId::String(s) => write!(f, "{}", s),
            UserId::Uuid(u) => write!(f, "{}", u),
            UserId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId::String(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::String(s.to_string())
    }
}

impl From<u64> for UserId {
    fn from(i: u64) -> Self {
        UserId::Integer(i)
    }
}

impl From<Uuid> for UserId {
    fn from(u: Uuid) -> Self {
        UserId::Uuid(u)
    }
}

/// A user's declared interests; tag order is irrelevant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInterests {
    pub id: UserId,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl UserInterests {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<UserId>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tags,
        }
    }
}

/// The interest vector space for one matching request
///
/// One unit-normalized row per input user, in input order. Rows of users
/// with no interests remain zero vectors.
#[derive(Debug, Clone)]
pub struct InterestSpace {
    vocabulary: Vec<String>,
    ids: Vec<UserId>,
    rows: Vec<Vector>,
}

impl InterestSpace {
    /// Build the space from the observed population
    ///
    /// The vocabulary is the sorted, deduplicated union of all tags, so
    /// vector indices are deterministic for a given population.
    pub fn build(users: &[UserInterests]) -> Self {
        let vocabulary: Vec<String> = users
            .iter()
            .flat_map(|u| u.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let positions: AHashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, tag)| (tag.as_str(), i))
            .collect();

        let mut ids = Vec::with_capacity(users.len());
        let mut rows = Vec::with_capacity(users.len());
        for user in users {
            let mut row = Vector::zeros(vocabulary.len());
            for tag in &user.tags {
                if let Some(&pos) = positions.get(tag.as_str()) {
                    row.as_mut_slice()[pos] = 1.0;
                }
            }
            row.normalize();
            ids.push(user.id.clone());
            rows.push(row);
        }

        Self {
            vocabulary,
            ids,
            rows,
        }
    }

    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Vector> {
        self.rows.get(index)
    }

    #[inline]
    #[must_use]
    pub fn id(&self, index: usize) -> Option<&UserId> {
        self.ids.get(index)
    }

    /// Row index of a user, if present in the population
    #[must_use]
    pub fn position_of(&self, id: &UserId) -> Option<usize> {
        self.ids.iter().position(|other| other == id)
    }

    #[inline]
    pub(crate) fn rows(&self) -> &[Vector] {
        &self.rows
    }

    #[inline]
    pub(crate) fn ids(&self) -> &[UserId] {
        &self.ids
    }
}
