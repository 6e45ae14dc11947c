//! Frozen lookup tables: canonical topics, synonym lists, the term
//! expansion dictionary, and the course catalog.
//!
//! All tables are process-wide read-only data built once at first use and
//! never mutated, so concurrent readers need no synchronization.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use smallvec::{smallvec, SmallVec};

/// Canonical topic keys, in registry order
pub const TOPICS: [&str; 20] = [
    "math",
    "cs",
    "ai",
    "ml",
    "nlp",
    "data",
    "economics",
    "history",
    "languages",
    "art",
    "biology",
    "robotics",
    "algorithms",
    "systems",
    "web",
    "physics",
    "quantum",
    "stats",
    "education",
    "design",
];

/// Keywords that count as a weak match (weight 0.6) for their topic
pub static SYNONYMS: &[(&str, &[&str])] = &[
    ("math", &["algebra", "calculus", "geometry", "linear algebra", "equations"]),
    ("cs", &["computer science", "programming", "software", "coding"]),
    ("ai", &["artificial intelligence", "agents", "search & planning"]),
    ("ml", &["machine learning", "neural network", "deep learning", "supervised learning"]),
    ("nlp", &["natural language", "text classification", "machine translation", "language model"]),
    ("data", &["sql", "pandas", "analytics", "visualization", "etl"]),
    ("economics", &["econ", "microeconomics", "macroeconomics", "game theory"]),
    ("history", &["historiography", "archives", "historical"]),
    ("languages", &["linguistics", "grammar", "phonetics", "translation"]),
    ("art", &["painting", "renaissance", "curation", "digital humanities"]),
    ("biology", &["genetics", "genomics", "molecular", "bioinformatics"]),
    ("robotics", &["robot", "kinematics", "sensors", "control", "ros"]),
    ("algorithms", &["complexity", "graph algorithms", "dynamic programming", "sorting"]),
    ("systems", &["operating system", "distributed", "compilers", "linux"]),
    ("web", &["html", "css", "javascript", "react", "frontend"]),
    ("physics", &["mechanics", "electromagnetism", "thermodynamics"]),
    ("quantum", &["quantum computing", "qubit", "qiskit"]),
    ("stats", &["statistics", "probability", "regression", "inference"]),
    ("education", &["pedagogy", "teaching", "learning science", "assessment"]),
    ("design", &["typography", "ux", "interaction design", "design systems"]),
];

/// Phrase -> weighted topic associations for free-text expansion
pub static TERM_DICTIONARY: &[(&str, &[(&str, f32)])] = &[
    ("econometrics", &[("economics", 1.0), ("stats", 0.9), ("data", 0.5)]),
    ("machine learning", &[("ml", 1.0), ("ai", 0.8), ("stats", 0.5)]),
    ("deep learning", &[("ml", 1.0), ("ai", 0.8)]),
    ("neural networks", &[("ml", 1.0), ("ai", 0.7)]),
    ("natural language processing", &[("nlp", 1.0), ("ai", 0.7), ("ml", 0.6)]),
    ("computer vision", &[("ai", 0.9), ("ml", 0.8)]),
    ("data science", &[("data", 1.0), ("stats", 0.8), ("ml", 0.6)]),
    ("statistics", &[("stats", 1.0), ("math", 0.5)]),
    ("web development", &[("web", 1.0), ("cs", 0.5)]),
    ("game theory", &[("economics", 0.8), ("math", 0.6)]),
    ("bioinformatics", &[("biology", 1.0), ("data", 0.6), ("cs", 0.5)]),
    ("quantum computing", &[("quantum", 1.0), ("physics", 0.7), ("cs", 0.4)]),
];

static TOPIC_POSITIONS: Lazy<AHashMap<&'static str, usize>> =
    Lazy::new(|| TOPICS.iter().enumerate().map(|(i, &t)| (t, i)).collect());

/// Registry position of a canonical topic key
#[inline]
#[must_use]
pub fn topic_index(topic: &str) -> Option<usize> {
    TOPIC_POSITIONS.get(topic).copied()
}

/// Synonym list of a canonical topic (empty for unknown keys)
#[must_use]
pub fn synonyms_of(topic: &str) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(t, _)| *t == topic)
        .map(|(_, kws)| *kws)
        .unwrap_or(&[])
}

/// A recommendable unit of the fixed catalog
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub tags: SmallVec<[&'static str; 4]>,
    /// 0 = introductory .. 2 = advanced
    pub level: u8,
}

impl Course {
    #[inline]
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

/// The fixed course catalog, defined once at startup and read-only after
pub static CATALOG: Lazy<Vec<Course>> = Lazy::new(|| {
    vec![
        Course {
            id: "math_found",
            title: "Math Foundations (Algebra & Calc)",
            tags: smallvec!["math"],
            level: 0,
        },
        Course {
            id: "lin_alg",
            title: "Linear Algebra Essentials",
            tags: smallvec!["math"],
            level: 1,
        },
        Course {
            id: "python_intro",
            title: "Python Programming for Everyone",
            tags: smallvec!["cs", "web", "data"],
            level: 0,
        },
        Course {
            id: "ds_algo",
            title: "Data Structures & Algorithms",
            tags: smallvec!["cs", "algorithms"],
            level: 1,
        },
        Course {
            id: "ml_intro",
            title: "Intro to Machine Learning",
            tags: smallvec!["ml", "ai", "stats"],
            level: 1,
        },
        Course {
            id: "ml_projects",
            title: "ML Projects: From Notebook to App",
            tags: smallvec!["ml", "ai", "data"],
            level: 2,
        },
        Course {
            id: "nlp_intro",
            title: "NLP Fundamentals",
            tags: smallvec!["nlp", "ai"],
            level: 1,
        },
        Course {
            id: "data_analytics",
            title: "Practical Data Analytics with Python",
            tags: smallvec!["data", "stats"],
            level: 1,
        },
        Course {
            id: "web_fullstack",
            title: "Full-Stack Web Basics (HTML/CSS/JS)",
            tags: smallvec!["web", "cs", "systems"],
            level: 0,
        },
        Course {
            id: "robotics_intro",
            title: "Robotics Basics",
            tags: smallvec!["robotics", "physics"],
            level: 1,
        },
        Course {
            id: "econ_data",
            title: "Econometrics & Data",
            tags: smallvec!["economics", "stats", "data"],
            level: 2,
        },
    ]
});
