//! Hashtag retriever with rate-limit handling and duplicate removal.

use std::collections::HashSet;
use std::time::Duration;

use log::{info, warn};
use thiserror::Error;

use crate::config::RetrievalConfig;
use crate::types::{GraphError, GraphResult, TweetRecord};

/// Why a single search call failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The backend refused the call; it may be retried once `reset_in`
    /// has elapsed.
    #[error("Rate limited, resets in {reset_in:?}")]
    RateLimited { reset_in: Duration },

    /// Any other failure. Not retried.
    #[error("Search failed: {0}")]
    Failed(String),
}

/// A search backend returning the tweets tagged with a hashtag.
pub trait TweetSource {
    /// Run one search. `hashtag` has no leading `#`.
    fn search(&mut self, hashtag: &str) -> Result<Vec<TweetRecord>, SearchError>;
}

/// Blocks the caller while waiting out a rate limit.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Runs hashtag searches against a [`TweetSource`].
pub struct HashtagRetriever<S, Z = ThreadSleeper> {
    source: S,
    sleeper: Z,
    hashtags: Vec<String>,
    max_rate_limit_retries: u32,
    padding: Duration,
}

impl<S: TweetSource> HashtagRetriever<S, ThreadSleeper> {
    /// Create a retriever that sleeps the current thread on rate limits.
    pub fn new(source: S, config: &RetrievalConfig) -> Self {
        Self {
            source,
            sleeper: ThreadSleeper,
            hashtags: config.hashtags.clone(),
            max_rate_limit_retries: config.max_rate_limit_retries,
            padding: Duration::from_secs(config.rate_limit_padding_secs),
        }
    }
}

impl<S: TweetSource, Z: Sleeper> HashtagRetriever<S, Z> {
    /// Replace the sleeper.
    pub fn with_sleeper<Z2: Sleeper>(self, sleeper: Z2) -> HashtagRetriever<S, Z2> {
        HashtagRetriever {
            source: self.source,
            sleeper,
            hashtags: self.hashtags,
            max_rate_limit_retries: self.max_rate_limit_retries,
            padding: self.padding,
        }
    }

    /// Hashtags searched by [`retrieve`](Self::retrieve).
    pub fn hashtags(&self) -> &[String] {
        &self.hashtags
    }

    /// Give back the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Search a single hashtag.
    ///
    /// A rate-limited search is retried after the reported reset time plus
    /// padding, up to the configured number of times. Any other failure
    /// yields an empty result so that one bad hashtag does not sink a
    /// whole run.
    pub fn retrieve_by_hashtag(&mut self, hashtag: &str) -> GraphResult<Vec<TweetRecord>> {
        let mut retries = 0;
        loop {
            match self.source.search(hashtag) {
                Ok(tweets) => {
                    info!("Retrieved {} tweets for #{}", tweets.len(), hashtag);
                    return Ok(tweets);
                }
                Err(SearchError::RateLimited { reset_in }) => {
                    if retries >= self.max_rate_limit_retries {
                        return Err(GraphError::Retrieval(format!(
                            "#{} still rate limited after {} retries",
                            hashtag, retries
                        )));
                    }
                    let wait = reset_in.saturating_add(self.padding);
                    warn!(
                        "Too many requests for #{}, sleeping for {} seconds",
                        hashtag,
                        wait.as_secs()
                    );
                    self.sleeper.sleep(wait);
                    retries += 1;
                }
                Err(SearchError::Failed(reason)) => {
                    warn!("Error in retrieving tweets for #{}: {}", hashtag, reason);
                    return Ok(Vec::new());
                }
            }
        }
    }

    /// Search several hashtags and merge the results in order, dropping
    /// tweets already returned for an earlier hashtag.
    ///
    /// Two tweets are the same when author and text match. Records without
    /// text only collapse when they are identical.
    pub fn retrieve_by_hashtags<T: AsRef<str>>(
        &mut self,
        hashtags: &[T],
    ) -> GraphResult<Vec<TweetRecord>> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut seen_textless: HashSet<TweetRecord> = HashSet::new();
        let mut merged: Vec<TweetRecord> = Vec::new();

        for hashtag in hashtags {
            for tweet in self.retrieve_by_hashtag(hashtag.as_ref())? {
                let duplicate = match &tweet.text {
                    Some(text) => !seen.insert((tweet.author.clone(), text.clone())),
                    None => !seen_textless.insert(tweet.clone()),
                };
                if !duplicate {
                    merged.push(tweet);
                }
            }
        }
        Ok(merged)
    }

    /// Search every configured hashtag.
    pub fn retrieve(&mut self) -> GraphResult<Vec<TweetRecord>> {
        let hashtags = self.hashtags.clone();
        self.retrieve_by_hashtags(hashtags.as_slice())
    }
}
