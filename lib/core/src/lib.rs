//! # mentora Core
//!
//! Core library for the mentora recommendation engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Vector`] - Dense vector representation with cosine operations
//! - [`InterestSpace`] - Normalized interest vector space over a user population
//! - [`NeighborMatcher`] - Top-k cosine neighbor search with strategy fallback
//! - [`RoadmapGraph`] - Prerequisite graph assembly from collaborator records
//!
//! ## Example
//!
//! ```rust
//! use mentora_core::{find_neighbors, UserId, UserInterests};
//!
//! let users = vec![
//!     UserInterests::new("u1", vec!["ml".into(), "data".into()]),
//!     UserInterests::new("u2", vec!["ml".into()]),
//!     UserInterests::new("u3", vec!["art".into()]),
//! ];
//!
//! let neighbors = find_neighbors(&UserId::from("u1"), &users, 2).unwrap();
//! assert_eq!(neighbors[0].id, UserId::from("u2"));
//! ```

pub mod error;
pub mod graph;
pub mod knn;
pub mod space;
pub mod vector;

pub use error::{Error, Result};
pub use graph::{CourseRecord, PrereqEdge, RoadmapGraph, RoadmapNode};
pub use knn::{find_neighbors, Neighbor, NeighborMatcher, SearchStrategy};
pub use space::{InterestSpace, UserId, UserInterests};
pub use vector::Vector;
