use super::kind::{NodeId, NodeKind};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GREETING_MESSAGE: &str =
    "Hello, I'm calling from Caantin AI. How can I help you today?";
pub const DEFAULT_QUESTION: &str = "Would you like to know more about our services?";
pub const DEFAULT_QUESTION_OPTIONS: [&str; 3] = ["Yes", "No", "Tell me more"];
pub const DEFAULT_INFORMATION_MESSAGE: &str =
    "We offer intelligent voice solutions for businesses across Africa.";

/// Payload shared by greeting and information nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageData {
    pub message: String,
}

/// Payload of a question node. Option order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionData {
    pub question: String,
    pub options: Vec<String>,
}

/// Variant-specific node data. The tag and the payload travel together,
/// so a greeting can never carry question data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeContent {
    Greeting(MessageData),
    Question(QuestionData),
    Information(MessageData),
}

impl NodeContent {
    /// Placeholder content a freshly created node of `kind` starts with.
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Greeting => NodeContent::Greeting(MessageData {
                message: DEFAULT_GREETING_MESSAGE.to_string(),
            }),
            NodeKind::Question => NodeContent::Question(QuestionData {
                question: DEFAULT_QUESTION.to_string(),
                options: DEFAULT_QUESTION_OPTIONS.iter().map(|s| s.to_string()).collect(),
            }),
            NodeKind::Information => NodeContent::Information(MessageData {
                message: DEFAULT_INFORMATION_MESSAGE.to_string(),
            }),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeContent::Greeting(_) => NodeKind::Greeting,
            NodeContent::Question(_) => NodeKind::Question,
            NodeContent::Information(_) => NodeKind::Information,
        }
    }
}

/// A single unit of conversational content.
///
/// Nodes are values: every edit (see [`Node::update_field`]) returns a new node
/// with the same id and kind, leaving the original untouched.
///
/// The serialized form is `{ "id": ..., "type": "greeting", "data": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    #[serde(flatten)]
    content: NodeContent,
}

impl Node {
    /// Creates a node of `kind` with default content and a fresh id.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: NodeId::generate(),
            content: NodeContent::default_for(kind),
        }
    }

    /// Assembles a node from an existing id and content, e.g. when importing.
    pub fn from_parts(id: impl Into<NodeId>, content: NodeContent) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.content.kind()
    }

    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    /// Builds a sibling value with the same identity and new content.
    /// Callers must keep the variant unchanged.
    pub(crate) fn with_content(&self, content: NodeContent) -> Self {
        debug_assert_eq!(content.kind(), self.kind());
        Self {
            id: self.id.clone(),
            content,
        }
    }
}

/// Returns a new node of the given variant with default content and a unique id.
pub fn create_default(kind: NodeKind) -> Node {
    Node::new(kind)
}
