//! Edges between users and the canonical key used to find them.

use std::collections::BTreeSet;

/// Unordered pair of node indices, stored as `(min, max)` so that
/// `{a, b}` and `{b, a}` produce the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(usize, usize);

impl PairKey {
    /// Canonical key for the pair `{a, b}`.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// The smaller index.
    pub fn low(&self) -> usize {
        self.0
    }

    /// The larger index.
    pub fn high(&self) -> usize {
        self.1
    }
}

/// An undirected relationship between two distinct users.
///
/// `source` and `target` only record the direction the edge was first
/// seen in (author, then mentioned user). Lookups ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Node index of the author of the first contributing tweet.
    pub source: usize,
    /// Node index of the user that tweet mentioned.
    pub target: usize,
    /// Number of tweets that co-mention the pair. Always at least 1.
    pub strength: u32,
    /// Union of the hashtags of every contributing tweet.
    pub tags: BTreeSet<String>,
}

impl Edge {
    /// A fresh edge with strength 1.
    pub fn new<I, S>(source: usize, target: usize, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source,
            target,
            strength: 1,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Count one more tweet towards this edge.
    pub fn reinforce<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strength += 1;
        self.tags.extend(tags.into_iter().map(Into::into));
    }

    /// Canonical key of this edge's endpoints.
    pub fn key(&self) -> PairKey {
        PairKey::new(self.source, self.target)
    }

    /// Whether the node index is one of the two endpoints.
    pub fn contains(&self, node: usize) -> bool {
        self.source == node || self.target == node
    }

    /// The endpoint opposite `node`, if `node` is on this edge.
    pub fn other(&self, node: usize) -> Option<usize> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}
