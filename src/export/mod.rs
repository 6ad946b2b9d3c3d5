//! Output formats for a built graph.

pub mod listing;
pub mod visualization;

pub use listing::EdgeListing;
pub use visualization::{VisLink, VisNode, VisualizationGraph};
