//! Core graph structure — users + deduplicated edges with lookup indexes.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::types::{parse_tweets, Edge, GraphResult, PairKey, TweetRecord};

use super::GraphBuilder;

/// Undirected, weighted, tag-annotated graph of who mentions whom.
///
/// Users are stored in the order they were first seen, and that order is
/// the index space used by edges and by the visualization export. Edges
/// live in an arena in creation order; `edge_ids` maps each unordered
/// pair to its slot so that there is never more than one edge per pair.
#[derive(Debug, Clone, Default)]
pub struct MentionGraph {
    /// Screen names, indexed by node index.
    users: Vec<String>,
    /// Screen name -> node index.
    user_ids: HashMap<String, usize>,
    /// All edges, in creation order.
    edges: Vec<Edge>,
    /// Canonical pair -> position in `edges`.
    edge_ids: HashMap<PairKey, usize>,
    /// Node index -> positions in `edges` of every edge touching it.
    incidence: Vec<Vec<usize>>,
}

/// Summary numbers for a built graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of users.
    pub nodes: usize,
    /// Number of distinct user pairs.
    pub edges: usize,
    /// Sum of all edge strengths.
    pub total_strength: u64,
    /// Strongest single edge, 0 for an empty graph.
    pub max_strength: u32,
    /// Number of distinct hashtags across all edges.
    pub distinct_tags: usize,
    /// User with the most edges and that edge count. Ties go to the user
    /// seen first.
    pub most_important: Option<(String, usize)>,
}

impl MentionGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of tweet records in one pass.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<TweetRecord>,
    {
        let mut builder = GraphBuilder::new();
        builder.ingest_all(records);
        builder.build()
    }

    /// Parse a JSON array of tweet objects and build the graph from it.
    /// A malformed record fails the whole call.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let records = parse_tweets(json)?;
        Ok(Self::build(&records))
    }

    /// Number of users.
    pub fn node_count(&self) -> usize {
        self.users.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All users, in node-index order.
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// All edges, in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Screen name at a node index.
    pub fn user(&self, index: usize) -> Option<&str> {
        self.users.get(index).map(String::as_str)
    }

    /// Node index of a user.
    pub fn user_index(&self, user: &str) -> Option<usize> {
        self.user_ids.get(user).copied()
    }

    /// Whether the user is a node of this graph.
    pub fn contains_user(&self, user: &str) -> bool {
        self.user_ids.contains_key(user)
    }

    /// The edge joining two users, in either order.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&Edge> {
        let key = PairKey::new(self.user_index(a)?, self.user_index(b)?);
        self.edge_ids.get(&key).map(|&i| &self.edges[i])
    }

    /// Edges touching a user, in creation order. Empty for unknown users.
    pub fn edges_of(&self, user: &str) -> impl Iterator<Item = &Edge> + '_ {
        self.user_index(user)
            .map(|i| self.incidence[i].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&e| &self.edges[e])
    }

    /// Number of edges the user is an endpoint of. 0 for unknown users.
    pub fn importance(&self, user: &str) -> usize {
        self.user_index(user)
            .map(|i| self.incidence[i].len())
            .unwrap_or(0)
    }

    /// Every user sharing an edge with `user`, in edge creation order.
    ///
    /// Each pair has at most one edge, so the list never repeats a user
    /// and its length equals `importance(user)`.
    pub fn neighbours(&self, user: &str) -> Vec<&str> {
        let Some(node) = self.user_index(user) else {
            return Vec::new();
        };
        self.incidence[node]
            .iter()
            .filter_map(|&e| self.edges[e].other(node))
            .map(|n| self.users[n].as_str())
            .collect()
    }

    /// Union of the tags on every edge touching `user`.
    pub fn tags(&self, user: &str) -> BTreeSet<&str> {
        self.edges_of(user)
            .flat_map(|e| e.tags.iter().map(String::as_str))
            .collect()
    }

    /// Summary numbers for this graph.
    pub fn stats(&self) -> GraphStats {
        let distinct_tags: BTreeSet<&str> = self
            .edges
            .iter()
            .flat_map(|e| e.tags.iter().map(String::as_str))
            .collect();

        // Reversed index order on ties so the earliest user wins.
        let most_important = self
            .incidence
            .iter()
            .enumerate()
            .max_by(|(a, x), (b, y)| x.len().cmp(&y.len()).then(b.cmp(a)))
            .map(|(node, incident)| (node, incident.len()));

        GraphStats {
            nodes: self.users.len(),
            edges: self.edges.len(),
            total_strength: self.edges.iter().map(|e| e.strength as u64).sum(),
            max_strength: self.edges.iter().map(|e| e.strength).max().unwrap_or(0),
            distinct_tags: distinct_tags.len(),
            most_important: most_important.map(|(n, c)| (self.users[n].clone(), c)),
        }
    }

    /// Node index of `user`, adding it as a node if it is new.
    pub(crate) fn intern(&mut self, user: &str) -> usize {
        if let Some(&id) = self.user_ids.get(user) {
            return id;
        }
        let id = self.users.len();
        self.users.push(user.to_string());
        self.user_ids.insert(user.to_string(), id);
        self.incidence.push(Vec::new());
        id
    }

    /// Record one tweet linking `source` to `target`. Returns `true` when
    /// a new edge was created, `false` when an existing one was reinforced.
    ///
    /// Both indices must come from `intern` and must differ.
    pub(crate) fn link(&mut self, source: usize, target: usize, tags: &[String]) -> bool {
        debug_assert_ne!(source, target);
        let key = PairKey::new(source, target);
        if let Some(&e) = self.edge_ids.get(&key) {
            self.edges[e].reinforce(tags.iter().cloned());
            return false;
        }

        let e = self.edges.len();
        self.edges.push(Edge::new(source, target, tags.iter().cloned()));
        self.edge_ids.insert(key, e);
        self.incidence[source].push(e);
        self.incidence[target].push(e);
        true
    }
}
