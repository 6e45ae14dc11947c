//! Roadmap graph assembly
//!
//! Merges course/prerequisite records - the output of the text-generation
//! collaborator, so possibly partial, duplicated, or inconsistent - into a
//! deduplicated node list and a prerequisite -> dependent edge list that a
//! renderer can consume. This module is the trust boundary for that data:
//! missing fields degrade to placeholders, never to an error.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder for records that arrive without a usable description
pub const NO_DESCRIPTION: &str = "No description available";

/// Placeholder for nodes synthesized from prerequisite-only names
pub const PREREQ_DESCRIPTION: &str = "Prerequisite course - description not available";

/// Placeholder title for records that arrive without one
pub const UNKNOWN_TITLE: &str = "Unknown";

fn unknown_title() -> String {
    UNKNOWN_TITLE.to_string()
}

/// One course record as produced by the course-selection collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Missing titles degrade to `"Unknown"` rather than failing the batch
    #[serde(default = "unknown_title", alias = "course_title")]
    pub title: String,
    #[serde(default, alias = "course_description")]
    pub description: Option<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl CourseRecord {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            prerequisites: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }
}

/// A course vertex; `name` is unique within a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapNode {
    pub name: String,
    pub description: String,
}

/// A prerequisite -> dependent edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrereqEdge {
    pub prerequisite: String,
    pub dependent: String,
}

/// Directed roadmap graph; every edge endpoint has a node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapGraph {
    pub nodes: Vec<RoadmapNode>,
    pub edges: Vec<PrereqEdge>,
}

impl RoadmapGraph {
    /// Assemble the graph from collaborator records
    ///
    /// Duplicate titles keep the first record seen. Prerequisite names
    /// without a record of their own get a synthesized placeholder node.
    /// Repeated (prerequisite, dependent) pairs collapse to one edge,
    /// first-seen order preserved. Empty input yields an empty graph.
    pub fn build(records: &[CourseRecord]) -> Self {
        let mut nodes = Vec::new();
        let mut known: AHashSet<&str> = AHashSet::new();

        for record in records {
            if !known.insert(record.title.as_str()) {
                continue;
            }
            let description = match record.description.as_deref() {
                Some(d) if !d.trim().is_empty() && d != "No description" => d.to_string(),
                _ => NO_DESCRIPTION.to_string(),
            };
            nodes.push(RoadmapNode {
                name: record.title.clone(),
                description,
            });
        }

        // Every edge endpoint must resolve to a node, so prerequisite-only
        // names get placeholder vertices.
        let mut synthesized = 0usize;
        for record in records {
            for prereq in &record.prerequisites {
                if known.insert(prereq.as_str()) {
                    nodes.push(RoadmapNode {
                        name: prereq.clone(),
                        description: PREREQ_DESCRIPTION.to_string(),
                    });
                    synthesized += 1;
                }
            }
        }
        if synthesized > 0 {
            debug!(synthesized, "added placeholder nodes for prerequisite-only names");
        }

        let mut edges = Vec::new();
        let mut seen: AHashSet<(&str, &str)> = AHashSet::new();
        for record in records {
            for prereq in &record.prerequisites {
                if seen.insert((prereq.as_str(), record.title.as_str())) {
                    edges.push(PrereqEdge {
                        prerequisite: prereq.clone(),
                        dependent: record.title.clone(),
                    });
                }
            }
        }

        Self { nodes, edges }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the prerequisite relation is free of cycles
    ///
    /// The builder never breaks cycles; the renderer decides what to do
    /// with a cyclic roadmap.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        // Kahn's algorithm: a cycle leaves nodes with nonzero in-degree.
        let mut in_degree: ahash::AHashMap<&str, usize> = self
            .nodes
            .iter()
            .map(|n| (n.name.as_str(), 0usize))
            .collect();
        for edge in &self.edges {
            if let Some(d) = in_degree.get_mut(edge.dependent.as_str()) {
                *d += 1;
            }
        }

        let mut queue: Vec<&str> = in_degree
            .iter()
            .filter(|(_, &d)| d == 0)
            .map(|(&n, _)| n)
            .collect();
        let mut visited = 0usize;
        while let Some(node) = queue.pop() {
            visited += 1;
            for edge in &self.edges {
                if edge.prerequisite == node {
                    if let Some(d) = in_degree.get_mut(edge.dependent.as_str()) {
                        *d -= 1;
                        if *d == 0 {
                            queue.push(edge.dependent.as_str());
                        }
                    }
                }
            }
        }
        visited == self.nodes.len()
    }

    /// The two-list (vertices, edges) contract consumed by the renderer
    #[must_use]
    pub fn into_lists(self) -> (Vec<(String, String)>, Vec<(String, String)>) {
        let vertices = self
            .nodes
            .into_iter()
            .map(|n| (n.name, n.description))
            .collect();
        let edges = self
            .edges
            .into_iter()
            .map(|e| (e.prerequisite, e.dependent))
            .collect();
        (vertices, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_graph() {
        let graph = RoadmapGraph::build(&[]);
        assert!(graph.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_every_edge_endpoint_has_a_node() {
        let records = vec![CourseRecord::new("B").with_prerequisites(["A"])];
        let graph = RoadmapGraph::build(&records);

        let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        assert!(names.contains(&"A"));
        assert!(names.contains(&"B"));
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].prerequisite, "A");
        assert_eq!(graph.edges[0].dependent, "B");
    }

    #[test]
    fn test_prerequisite_only_node_gets_placeholder() {
        let records = vec![CourseRecord::new("Calculus").with_prerequisites(["Algebra"])];
        let graph = RoadmapGraph::build(&records);

        let algebra = graph.nodes.iter().find(|n| n.name == "Algebra").unwrap();
        assert_eq!(algebra.description, PREREQ_DESCRIPTION);
    }

    #[test]
    fn test_missing_description_gets_placeholder() {
        let records = vec![
            CourseRecord::new("Linear Algebra"),
            CourseRecord::new("Probability").with_description("  "),
        ];
        let graph = RoadmapGraph::build(&records);
        assert!(graph.nodes.iter().all(|n| n.description == NO_DESCRIPTION));
    }

    #[test]
    fn test_duplicate_titles_keep_first_record() {
        let records = vec![
            CourseRecord::new("ML Basics").with_description("first"),
            CourseRecord::new("ML Basics").with_description("second"),
        ];
        let graph = RoadmapGraph::build(&records);
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].description, "first");
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let records = vec![
            CourseRecord::new("B").with_prerequisites(["A", "A"]),
            CourseRecord::new("B").with_prerequisites(["A"]),
        ];
        let graph = RoadmapGraph::build(&records);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_cycle_is_kept_and_reported() {
        let records = vec![
            CourseRecord::new("A").with_prerequisites(["B"]),
            CourseRecord::new("B").with_prerequisites(["A"]),
        ];
        let graph = RoadmapGraph::build(&records);
        assert_eq!(graph.edges.len(), 2);
        assert!(!graph.is_acyclic());

        let chain = vec![
            CourseRecord::new("C").with_prerequisites(["B"]),
            CourseRecord::new("B").with_prerequisites(["A"]),
        ];
        assert!(RoadmapGraph::build(&chain).is_acyclic());
    }

    #[test]
    fn test_two_list_contract() {
        let records = vec![CourseRecord::new("B")
            .with_description("desc")
            .with_prerequisites(["A"])];
        let (vertices, edges) = RoadmapGraph::build(&records).into_lists();
        assert_eq!(vertices[0], ("B".to_string(), "desc".to_string()));
        assert_eq!(edges, vec![("A".to_string(), "B".to_string())]);
    }

    #[test]
    fn test_missing_title_degrades_to_unknown() {
        let raw = serde_json::json!([
            { "course_description": "orphaned text", "prerequisites": ["Algebra"] },
            { "title": "Algebra", "course_description": "Solving for x" }
        ]);
        let records: Vec<CourseRecord> = serde_json::from_value(raw).unwrap();
        assert_eq!(records[0].title, UNKNOWN_TITLE);

        let graph = RoadmapGraph::build(&records);
        let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        assert!(names.contains(&UNKNOWN_TITLE));
        assert_eq!(graph.edges[0].dependent, UNKNOWN_TITLE);
    }

    #[test]
    fn test_lenient_collaborator_field_names() {
        let raw = serde_json::json!([
            {
                "course_title": "NLP Fundamentals",
                "course_description": "Tokens and parsing",
                "prerequisites": ["Linguistics (Intro)"]
            },
            { "title": "Linguistics (Intro)" }
        ]);
        let records: Vec<CourseRecord> = serde_json::from_value(raw).unwrap();
        let graph = RoadmapGraph::build(&records);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
    }
}
