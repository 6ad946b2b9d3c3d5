//! Basic tweets -> graph -> query -> export flow.

use mention_graph::*;

fn main() -> GraphResult<()> {
    let tweets = parse_tweets(
        r#"[
            {"user": "alice", "mentions": ["bob"], "hashtags": ["orms"]},
            {"user": "carol", "mentions": ["bob", "alice"], "hashtags": ["orms", "orblog"]},
            {"user": "bob", "mentions": ["alice"], "hashtags": ["thisisor"]},
            {"user": "dave", "hashtags": ["orms"]}
        ]"#,
    )?;

    let graph = MentionGraph::build(&tweets);
    println!(
        "Graph built with {} users and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    for user in graph.users() {
        let tags: Vec<&str> = graph.tags(user).into_iter().collect();
        println!(
            "  {}: importance {}, neighbours [{}], tags [{}]",
            user,
            graph.importance(user),
            graph.neighbours(user).join(", "),
            tags.join(", ")
        );
    }

    println!("\nEdges:");
    print!("{}", graph.listing());

    println!("\nVisualization export:");
    println!("{}", graph.to_visualization_format().to_json(true)?);

    Ok(())
}
