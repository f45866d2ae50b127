use crate::error::NodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The closed set of conversation node variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Greeting,
    Question,
    Information,
}

impl NodeKind {
    pub const ALL: [NodeKind; 3] = [NodeKind::Greeting, NodeKind::Question, NodeKind::Information];

    /// Human-readable name used in titles and result messages.
    pub fn display_name(self) -> &'static str {
        match self {
            NodeKind::Greeting => "Greeting",
            NodeKind::Question => "Question",
            NodeKind::Information => "Information",
        }
    }

    /// The wire tag written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Greeting => "greeting",
            NodeKind::Question => "question",
            NodeKind::Information => "information",
        }
    }

    /// The data fields a node of this kind carries.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            NodeKind::Greeting | NodeKind::Information => &["message"],
            NodeKind::Question => &["question", "options"],
        }
    }

    pub fn has_field(self, field: &str) -> bool {
        self.fields().contains(&field)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for NodeKind {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NodeError::UnknownKind(s.to_string()))
    }
}

/// Identifier of a node. Unique within a store, immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Generates a fresh, collision-free id of the form `node-<uuid>`.
    pub fn generate() -> Self {
        Self(format!("node-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
