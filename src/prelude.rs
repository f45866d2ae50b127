//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! script-builder crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use script_builder::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut store = NodeStore::with_default_key(MemoryBlobStore::new());
//! let node = Node::new(NodeKind::Information);
//! if node.is_valid() {
//!     let result = store.save(node);
//!     println!("{}", result.message);
//! }
//! # Ok(())
//! # }
//! ```

// Node model
pub use crate::node::{
    DataPatch, MessageData, Node, NodeContent, NodeId, NodeKind, QuestionData, create_default,
};

// Persistence
pub use crate::storage::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use crate::store::{NodeState, NodeStore, OperationResult, StoreAction};

// Collaborators
pub use crate::assist::{
    AnalysisReport, AssistSession, Assistant, CannedAssistant, Improvement, apply_improvement,
};
pub use crate::notify::{Notification, NotificationKind, Notifier};

// Configuration
pub use crate::config::Settings;

// Error types
pub use crate::error::{
    AssistError, ConfigError, FieldIssue, NodeError, StorageError, StoreError, ValidationErrors,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
