//! All data types for the mention graph library.

pub mod edge;
pub mod error;
pub mod tweet;

pub use edge::{Edge, PairKey};
pub use error::{GraphError, GraphResult};
pub use tweet::{parse_tweets, TweetRecord};
