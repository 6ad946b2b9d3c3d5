//! CLI command implementations.

use std::path::Path;

use crate::graph::{GraphBuilder, MentionGraph};
use crate::types::{parse_tweets, GraphResult};

/// Read a tweet file as text. Bytes that are not UTF-8 count as
/// malformed input rather than an I/O failure.
pub fn read_tweet_file(path: &Path) -> GraphResult<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

/// Read a JSON tweet file and build its graph.
pub fn load_graph(path: &Path) -> GraphResult<MentionGraph> {
    MentionGraph::from_json(&read_tweet_file(path)?)
}

/// Print the visualization export.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    println!("{}", graph.to_visualization_format().to_json(pretty)?);
    Ok(())
}

/// Print one line per edge.
pub fn cmd_list(path: &Path) -> GraphResult<()> {
    let graph = load_graph(path)?;
    print!("{}", graph.listing());
    Ok(())
}

/// Print importance, neighbours and tags of one user.
pub fn cmd_node(path: &Path, user: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let importance = graph.importance(user);
    let neighbours = graph.neighbours(user);
    let tags: Vec<&str> = graph.tags(user).into_iter().collect();

    if json {
        let info = serde_json::json!({
            "name": user,
            "known": graph.contains_user(user),
            "importance": importance,
            "neighbours": neighbours,
            "tags": tags,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("User {}", user);
        if !graph.contains_user(user) {
            println!("  (not in graph)");
        }
        println!("  Importance: {}", importance);
        println!("  Neighbours: {}", neighbours.join(", "));
        println!("  Tags: {}", tags.join(", "));
    }
    Ok(())
}

/// Print summary numbers for the graph.
pub fn cmd_stats(path: &Path, json: bool) -> GraphResult<()> {
    let records = parse_tweets(&read_tweet_file(path)?)?;
    let mut builder = GraphBuilder::new();
    builder.ingest_all(&records);
    let skipped = builder.skipped();
    let stats = builder.build().stats();

    if json {
        let mut value = serde_json::to_value(&stats)?;
        value["tweets"] = serde_json::json!(records.len());
        value["skipped_tweets"] = serde_json::json!(skipped);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("File: {}", path.display());
        println!("Tweets: {} ({} without mentions)", records.len(), skipped);
        println!("Users: {}", stats.nodes);
        println!("Edges: {}", stats.edges);
        println!("Total strength: {}", stats.total_strength);
        println!("Max strength: {}", stats.max_strength);
        println!("Distinct tags: {}", stats.distinct_tags);
        if let Some((user, importance)) = &stats.most_important {
            println!("Most connected: {} ({} edges)", user, importance);
        }
    }
    Ok(())
}
