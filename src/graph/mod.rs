//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod mention_graph;

pub use builder::{GraphBuilder, IngestOutcome};
pub use mention_graph::{GraphStats, MentionGraph};
