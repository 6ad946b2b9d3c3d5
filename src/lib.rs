//! MentionGraph — who-mentions-whom graphs from hashtag tweet searches.
//!
//! Tweets (author, mentioned users, hashtags) are folded into an undirected
//! graph whose edges count how many tweets link each pair of users and
//! collect the hashtags those tweets carried. The built graph answers
//! per-user queries and exports a node/link structure for visualization.

pub mod cli;
pub mod config;
pub mod export;
pub mod graph;
pub mod retrieval;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, parse_config, Config, ExportConfig, RetrievalConfig};
pub use export::{EdgeListing, VisLink, VisNode, VisualizationGraph};
pub use graph::{GraphBuilder, GraphStats, IngestOutcome, MentionGraph};
pub use retrieval::{HashtagRetriever, SearchError, Sleeper, ThreadSleeper, TweetSource};
pub use types::{parse_tweets, Edge, GraphError, GraphResult, PairKey, TweetRecord};
