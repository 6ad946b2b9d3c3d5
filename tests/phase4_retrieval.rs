//! Phase 4 tests: Hashtag retrieval and configuration.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use mention_graph::config::{parse_config, Config, RetrievalConfig};
use mention_graph::retrieval::{HashtagRetriever, SearchError, Sleeper, TweetSource};
use mention_graph::types::{GraphError, TweetRecord};
use mention_graph::MentionGraph;

// ==================== Helpers ====================

/// Replays scripted responses per hashtag and records every call.
#[derive(Default)]
struct ScriptedSource {
    responses: HashMap<String, VecDeque<Result<Vec<TweetRecord>, SearchError>>>,
    calls: Vec<String>,
}

impl ScriptedSource {
    fn respond(mut self, hashtag: &str, response: Result<Vec<TweetRecord>, SearchError>) -> Self {
        self.responses
            .entry(hashtag.to_string())
            .or_default()
            .push_back(response);
        self
    }
}

impl TweetSource for ScriptedSource {
    fn search(&mut self, hashtag: &str) -> Result<Vec<TweetRecord>, SearchError> {
        self.calls.push(hashtag.to_string());
        self.responses
            .get_mut(hashtag)
            .and_then(|q| q.pop_front())
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Default)]
struct RecordingSleeper {
    slept: Vec<Duration>,
}

impl Sleeper for &mut RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
    }
}

fn tweet(author: &str, text: &str, mentions: &[&str], hashtags: &[&str]) -> TweetRecord {
    TweetRecord::new(author, mentions.iter().copied(), hashtags.iter().copied()).with_text(text)
}

fn rate_limited(secs: u64) -> Result<Vec<TweetRecord>, SearchError> {
    Err(SearchError::RateLimited {
        reset_in: Duration::from_secs(secs),
    })
}

// ==================== Retriever Tests ====================

#[test]
fn test_retrieve_single_hashtag() {
    let source = ScriptedSource::default()
        .respond("orms", Ok(vec![tweet("a", "hi @b", &["b"], &["orms"])]));
    let mut retriever = HashtagRetriever::new(source, &RetrievalConfig::default());
    let tweets = retriever.retrieve_by_hashtag("orms").unwrap();
    assert_eq!(tweets.len(), 1);
    assert_eq!(tweets[0].author, "a");
}

#[test]
fn test_rate_limit_is_retried_after_reset() {
    let source = ScriptedSource::default()
        .respond("orms", rate_limited(30))
        .respond("orms", rate_limited(5))
        .respond("orms", Ok(vec![tweet("a", "t", &["b"], &[])]));
    let mut sleeper = RecordingSleeper::default();

    let mut retriever =
        HashtagRetriever::new(source, &RetrievalConfig::default()).with_sleeper(&mut sleeper);
    let tweets = retriever.retrieve_by_hashtag("orms").unwrap();
    assert_eq!(tweets.len(), 1);
    assert_eq!(retriever.into_source().calls.len(), 3);

    // Default padding is one second past the reported reset.
    assert_eq!(
        sleeper.slept,
        vec![Duration::from_secs(31), Duration::from_secs(6)]
    );
}

#[test]
fn test_rate_limit_gives_up_after_max_retries() {
    let config = RetrievalConfig {
        max_rate_limit_retries: 2,
        rate_limit_padding_secs: 0,
        ..RetrievalConfig::default()
    };
    let source = ScriptedSource::default()
        .respond("x", rate_limited(1))
        .respond("x", rate_limited(1))
        .respond("x", rate_limited(1))
        .respond("x", Ok(vec![tweet("a", "t", &["b"], &[])]));
    let mut sleeper = RecordingSleeper::default();

    let mut retriever = HashtagRetriever::new(source, &config).with_sleeper(&mut sleeper);
    let err = retriever.retrieve_by_hashtag("x").unwrap_err();
    assert!(matches!(err, GraphError::Retrieval(_)));
    assert_eq!(retriever.into_source().calls.len(), 3);
    assert_eq!(sleeper.slept.len(), 2);
}

#[test]
fn test_huge_reset_time_saturates_instead_of_overflowing() {
    let config = RetrievalConfig {
        max_rate_limit_retries: 1,
        ..RetrievalConfig::default()
    };
    let huge = || {
        Err(SearchError::RateLimited {
            reset_in: Duration::MAX,
        })
    };
    let source = ScriptedSource::default()
        .respond("x", huge())
        .respond("x", huge())
        .respond("y", huge())
        .respond("y", Ok(vec![tweet("a", "t", &["b"], &[])]));
    let mut sleeper = RecordingSleeper::default();

    let mut retriever = HashtagRetriever::new(source, &config).with_sleeper(&mut sleeper);
    let err = retriever.retrieve_by_hashtag("x").unwrap_err();
    assert!(matches!(err, GraphError::Retrieval(_)));
    assert_eq!(retriever.retrieve_by_hashtag("y").unwrap().len(), 1);
    drop(retriever);

    assert_eq!(sleeper.slept, vec![Duration::MAX, Duration::MAX]);
}

#[test]
fn test_failed_search_yields_empty_result() {
    let source = ScriptedSource::default()
        .respond("bad", Err(SearchError::Failed("boom".to_string())))
        .respond("good", Ok(vec![tweet("a", "t", &["b"], &["good"])]));
    let mut retriever = HashtagRetriever::new(source, &RetrievalConfig::default());

    assert!(retriever.retrieve_by_hashtag("bad").unwrap().is_empty());
    let tweets = retriever.retrieve_by_hashtags(&["bad", "good"]).unwrap();
    assert_eq!(tweets.len(), 1);
}

#[test]
fn test_merge_drops_duplicate_tweets() {
    let shared = tweet("a", "same text", &["b"], &["one", "two"]);
    let source = ScriptedSource::default()
        .respond("one", Ok(vec![shared.clone(), tweet("c", "other", &["a"], &["one"])]))
        .respond("two", Ok(vec![shared, tweet("a", "different", &["b"], &["two"])]));
    let mut retriever = HashtagRetriever::new(source, &RetrievalConfig::default());

    let tweets = retriever.retrieve_by_hashtags(&["one", "two"]).unwrap();
    let texts: Vec<&str> = tweets.iter().filter_map(|t| t.text.as_deref()).collect();
    assert_eq!(texts, vec!["same text", "other", "different"]);
}

#[test]
fn test_merge_keeps_distinct_textless_tweets() {
    let source = ScriptedSource::default()
        .respond("one", Ok(vec![TweetRecord::new("a", ["b"], ["one"])]))
        .respond(
            "two",
            Ok(vec![
                TweetRecord::new("a", ["b"], ["one"]),
                TweetRecord::new("a", ["c"], ["two"]),
            ]),
        );
    let mut retriever = HashtagRetriever::new(source, &RetrievalConfig::default());
    let tweets = retriever.retrieve_by_hashtags(&["one", "two"]).unwrap();
    assert_eq!(tweets.len(), 2);
}

#[test]
fn test_merge_drops_repeated_textless_tweets_in_order() {
    let batch: Vec<TweetRecord> = (0..200)
        .map(|i| TweetRecord::new(format!("user{}", i % 50), ["hub"], ["x"]))
        .collect();
    let source = ScriptedSource::default()
        .respond("one", Ok(batch.clone()))
        .respond("two", Ok(batch));
    let mut retriever = HashtagRetriever::new(source, &RetrievalConfig::default());

    let tweets = retriever.retrieve_by_hashtags(&["one", "two"]).unwrap();
    let authors: Vec<String> = tweets.iter().map(|t| t.author.clone()).collect();
    let expected: Vec<String> = (0..50).map(|i| format!("user{}", i)).collect();
    assert_eq!(authors, expected);
}

#[test]
fn test_retrieve_uses_configured_hashtags() {
    let config = RetrievalConfig {
        hashtags: vec!["orms".to_string(), "orblog".to_string()],
        ..RetrievalConfig::default()
    };
    let source = ScriptedSource::default()
        .respond("orms", Ok(vec![tweet("a", "1", &["b"], &["orms"])]))
        .respond("orblog", Ok(vec![tweet("b", "2", &["c"], &["orblog"])]));
    let mut retriever = HashtagRetriever::new(source, &config);
    assert_eq!(retriever.hashtags(), &["orms", "orblog"]);

    let tweets = retriever.retrieve().unwrap();
    let graph = MentionGraph::build(&tweets);
    assert_eq!(graph.users(), &["a", "b", "c"]);
    assert_eq!(retriever.into_source().calls, vec!["orms", "orblog"]);
}

// ==================== Config Tests ====================

#[test]
fn test_empty_config_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.retrieval.max_rate_limit_retries, 5);
    assert_eq!(config.retrieval.rate_limit_padding_secs, 1);
    assert!(config.retrieval.hashtags.is_empty());
    assert!(config.export.pretty);
}

#[test]
fn test_partial_config() {
    let config = parse_config(
        r#"
        [retrieval]
        hashtags = ["orms", "thisisor"]
        max_rate_limit_retries = 2

        [export]
        pretty = false
        "#,
    )
    .unwrap();
    assert_eq!(config.retrieval.hashtags, vec!["orms", "thisisor"]);
    assert_eq!(config.retrieval.max_rate_limit_retries, 2);
    assert_eq!(config.retrieval.rate_limit_padding_secs, 1);
    assert!(!config.export.pretty);
}

#[test]
fn test_invalid_config() {
    let err = parse_config("[retrieval]\nmax_rate_limit_retries = \"many\"").unwrap_err();
    assert!(matches!(err, GraphError::Config(_)));
}

#[test]
fn test_load_config_from_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "[export]\npretty = false\n").unwrap();
    let config = mention_graph::load_config(file.path()).unwrap();
    assert!(!config.export.pretty);

    let missing = mention_graph::load_config(std::path::Path::new("/nonexistent/mgraph.toml"));
    assert!(matches!(missing, Err(GraphError::Io(_))));
}
