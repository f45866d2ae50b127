//! Common test utilities for building nodes and stores.
use script_builder::prelude::*;

/// Storage key used by the test stores.
#[allow(dead_code)]
pub const TEST_KEY: &str = "test-nodes";

/// Builds a question node with a fixed id and the given options.
#[allow(dead_code)]
pub fn question_node(id: &str, question: &str, options: &[&str]) -> Node {
    Node::from_parts(
        id,
        NodeContent::Question(QuestionData {
            question: question.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        }),
    )
}

#[allow(dead_code)]
pub fn greeting_node(id: &str, message: &str) -> Node {
    Node::from_parts(
        id,
        NodeContent::Greeting(MessageData {
            message: message.to_string(),
        }),
    )
}

#[allow(dead_code)]
pub fn information_node(id: &str, message: &str) -> Node {
    Node::from_parts(
        id,
        NodeContent::Information(MessageData {
            message: message.to_string(),
        }),
    )
}

/// Builds `count` valid nodes cycling through the three kinds.
#[allow(dead_code)]
pub fn mixed_nodes(count: usize) -> Vec<Node> {
    (0..count)
        .map(|i| {
            let id = format!("node-{:03}", i);
            match i % 3 {
                0 => greeting_node(&id, &format!("Hello number {}", i)),
                1 => question_node(&id, &format!("Question {}?", i), &["Yes", "No"]),
                _ => information_node(&id, &format!("Fact number {}", i)),
            }
        })
        .collect()
}

/// Opens an empty in-memory store.
#[allow(dead_code)]
pub fn empty_store() -> NodeStore<MemoryBlobStore> {
    NodeStore::open(MemoryBlobStore::new(), TEST_KEY)
}

/// Opens a store whose blob already holds `nodes`.
#[allow(dead_code)]
pub fn seeded_store(nodes: &[Node]) -> NodeStore<MemoryBlobStore> {
    let raw = serde_json::to_string(nodes).expect("nodes serialize");
    NodeStore::open(MemoryBlobStore::with_blob(TEST_KEY, raw), TEST_KEY)
}

/// Reads back what the store last persisted.
#[allow(dead_code)]
pub fn persisted(store: &NodeStore<MemoryBlobStore>) -> Vec<Node> {
    let raw = store.blob().peek(TEST_KEY).expect("collection was persisted");
    serde_json::from_str(raw).expect("persisted collection parses")
}
