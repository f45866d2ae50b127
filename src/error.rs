use crate::node::NodeKind;
use itertools::Itertools;
use std::fmt;
use thiserror::Error;

/// Errors raised by the node model when an edit does not fit the node.
///
/// These indicate programming errors on the caller side (a patch built for
/// the wrong variant, an index from a stale view), not bad user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("Field '{field}' does not belong to a {kind} node")]
    InvalidVariant { kind: NodeKind, field: String },

    #[error("Unknown node type '{0}'")]
    UnknownKind(String),

    #[error("Unknown node field '{0}'")]
    UnknownField(String),

    #[error("Option index {index} is out of range for a question with {len} option(s)")]
    OptionOutOfRange { index: usize, len: usize },
}

/// A single field-level validation problem, suitable for showing next to a form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// The field the issue refers to, e.g. `message` or `options[2]`.
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All validation problems found on a node. Never empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Node is invalid: {}", .issues.iter().join("; "))]
pub struct ValidationErrors {
    pub issues: Vec<FieldIssue>,
}

impl ValidationErrors {
    /// Returns the issues reported for `field`, if any.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldIssue> + 'a {
        self.issues.iter().filter(move |issue| issue.field == field)
    }
}

/// Errors from the underlying key-value blob storage.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Errors surfaced by the node store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    #[error("There is no active node")]
    NoActiveNode,

    #[error(transparent)]
    Node(#[from] NodeError),

    #[error("Stored node collection under '{key}' is corrupt: {message}")]
    StorageCorrupt { key: String, message: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors from an assistant session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    #[error("An analysis is already in progress")]
    AnalysisPending,
}

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
