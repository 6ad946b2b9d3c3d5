//! Plain-text edge listing.

use std::fmt;

use crate::graph::MentionGraph;

/// Borrowing view that prints one line per edge:
/// `[source, target] of strength S - tags: t1, t2`.
pub struct EdgeListing<'a> {
    graph: &'a MentionGraph,
}

impl fmt::Display for EdgeListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let users = self.graph.users();
        for edge in self.graph.edges() {
            let tags: Vec<&str> = edge.tags.iter().map(String::as_str).collect();
            writeln!(
                f,
                "[{}, {}] of strength {} - tags: {}",
                users[edge.source],
                users[edge.target],
                edge.strength,
                tags.join(", ")
            )?;
        }
        Ok(())
    }
}

impl MentionGraph {
    /// Text listing of every edge, in creation order.
    pub fn listing(&self) -> EdgeListing<'_> {
        EdgeListing { graph: self }
    }
}
