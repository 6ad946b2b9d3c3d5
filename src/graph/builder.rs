//! Single-pass construction of a MentionGraph from tweet records.

use std::borrow::Borrow;

use log::debug;

use crate::types::TweetRecord;

use super::MentionGraph;

/// What ingesting one tweet did to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// No mentions left once the author was removed. Nothing was added,
    /// not even the author.
    Skipped,
    /// The author and every mentioned user are nodes, and each
    /// author/mention pair gained an edge or a strength increment.
    Linked {
        /// Pairs seen for the first time.
        new_edges: usize,
        /// Pairs whose existing edge was reinforced.
        reinforced_edges: usize,
    },
}

/// Accumulates tweet records into a MentionGraph.
pub struct GraphBuilder {
    graph: MentionGraph,
    ingested: usize,
    skipped: usize,
}

impl GraphBuilder {
    /// Create a builder around an empty graph.
    pub fn new() -> Self {
        Self {
            graph: MentionGraph::new(),
            ingested: 0,
            skipped: 0,
        }
    }

    /// Fold one tweet into the graph.
    pub fn ingest(&mut self, record: &TweetRecord) -> IngestOutcome {
        self.ingested += 1;

        // Self-citations never make an edge, even if the source kept them.
        let mut mentions: Vec<&str> = Vec::with_capacity(record.mentions.len());
        for m in &record.mentions {
            if *m != record.author && !mentions.contains(&m.as_str()) {
                mentions.push(m);
            }
        }

        if mentions.is_empty() {
            self.skipped += 1;
            debug!("Skipping tweet by {}: no mentions", record.author);
            return IngestOutcome::Skipped;
        }

        let author = self.graph.intern(&record.author);
        let targets: Vec<usize> = mentions.iter().map(|m| self.graph.intern(m)).collect();

        let mut new_edges = 0;
        let mut reinforced_edges = 0;
        for target in targets {
            if self.graph.link(author, target, &record.hashtags) {
                new_edges += 1;
            } else {
                reinforced_edges += 1;
            }
        }

        debug!(
            "Tweet by {}: {} new edges, {} reinforced",
            record.author, new_edges, reinforced_edges
        );
        IngestOutcome::Linked {
            new_edges,
            reinforced_edges,
        }
    }

    /// Fold a sequence of tweets into the graph, in order.
    pub fn ingest_all<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Borrow<TweetRecord>,
    {
        for record in records {
            self.ingest(record.borrow());
        }
        self
    }

    /// Number of records seen so far, skipped ones included.
    pub fn ingested(&self) -> usize {
        self.ingested
    }

    /// Number of records that contributed nothing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Finish construction.
    pub fn build(self) -> MentionGraph {
        debug!(
            "Built mention graph: {} tweets ({} skipped), {} nodes, {} edges",
            self.ingested,
            self.skipped,
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
