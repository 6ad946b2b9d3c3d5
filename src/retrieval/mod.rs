//! Fetching tweet records by hashtag.
//!
//! The search backend itself lives outside this crate; anything that can
//! answer "tweets tagged X" implements [`TweetSource`]. This module owns the
//! policy around it: rate-limit retries, tolerating failed searches, and
//! merging the results of several hashtags into one duplicate-free stream.

pub mod retriever;

pub use retriever::{HashtagRetriever, SearchError, Sleeper, ThreadSleeper, TweetSource};
