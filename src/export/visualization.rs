//! Node/link export for force-directed graph renderers such as d3.js.

use serde::Serialize;

use crate::graph::MentionGraph;
use crate::types::GraphResult;

/// One user in the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisNode {
    /// Screen name.
    pub name: String,
    /// Number of edges touching this user.
    pub importance: usize,
    /// Users sharing an edge with this one.
    pub neighbours: Vec<String>,
    /// Sorted union of the tags on this user's edges.
    pub tags: Vec<String>,
}

/// One edge in the export. Endpoints are positions in the `nodes` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisLink {
    /// Index of the first endpoint in `nodes`.
    pub source: usize,
    /// Index of the second endpoint in `nodes`.
    pub target: usize,
    /// Number of tweets linking the pair.
    pub strength: u32,
    /// Sorted tags of the edge.
    pub tags: Vec<String>,
}

/// Nodes plus index-linked edges.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VisualizationGraph {
    pub nodes: Vec<VisNode>,
    pub links: Vec<VisLink>,
}

impl VisualizationGraph {
    /// Render as JSON.
    pub fn to_json(&self, pretty: bool) -> GraphResult<String> {
        let out = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(out)
    }
}

impl MentionGraph {
    /// Snapshot the graph in node/link form.
    ///
    /// Nodes come out in first-seen order, and that is the order `source`
    /// and `target` index into. Links come out in edge creation order.
    pub fn to_visualization_format(&self) -> VisualizationGraph {
        let nodes = self
            .users()
            .iter()
            .map(|user| VisNode {
                name: user.clone(),
                importance: self.importance(user),
                neighbours: self
                    .neighbours(user)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                tags: self.tags(user).into_iter().map(str::to_string).collect(),
            })
            .collect();

        // Edge endpoints already are node indices; the export order is the
        // storage order, so they carry over unchanged.
        let links = self
            .edges()
            .iter()
            .map(|e| VisLink {
                source: e.source,
                target: e.target,
                strength: e.strength,
                tags: e.tags.iter().cloned().collect(),
            })
            .collect();

        VisualizationGraph { nodes, links }
    }
}
