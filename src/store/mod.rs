//! The node store: the persisted collection of saved nodes plus the active
//! (currently edited) node.
//!
//! A node moves through three states from the store's point of view:
//!
//! 1. **Unsaved** - it only exists as the active node value.
//! 2. **Saved** - it is present in the collection and findable by id.
//! 3. **Deleted** - it was removed from the collection. Saving a node that
//!    carries a deleted id later simply creates it again.
//!
//! Every change to the collection rewrites the whole collection as one JSON
//! blob through the [`BlobStore`]. Access is single-writer; the last write wins.

use crate::error::{NodeError, StoreError};
use crate::node::{Node, NodeId, NodeKind};
use crate::storage::BlobStore;
use ahash::AHashSet;
use tracing::{debug, error, warn};

mod outcome;

pub use outcome::*;

/// Storage key the collection is written under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "caantin-nodes";

/// Where a node id stands relative to the persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Unsaved,
    Saved,
}

pub struct NodeStore<B: BlobStore> {
    blob: B,
    key: String,
    nodes: Vec<Node>,
    active: Option<Node>,
}

impl<B: BlobStore> NodeStore<B> {
    /// Loads the collection stored under `key`.
    ///
    /// Loading never fails: a missing blob yields an empty collection, and a
    /// corrupt one is logged and replaced by an empty collection. The most
    /// recently saved node becomes active; with nothing saved, a fresh default
    /// greeting is.
    pub fn open(blob: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let nodes = match Self::load(&blob, &key) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding unreadable node collection");
                Vec::new()
            }
        };
        debug!(key = %key, count = nodes.len(), "Opened node store");

        let active = nodes
            .last()
            .cloned()
            .unwrap_or_else(|| Node::new(NodeKind::Greeting));

        Self {
            blob,
            key,
            nodes,
            active: Some(active),
        }
    }

    /// Opens the store under [`DEFAULT_STORAGE_KEY`].
    pub fn with_default_key(blob: B) -> Self {
        Self::open(blob, DEFAULT_STORAGE_KEY)
    }

    /// Reads and parses the collection under `key` without any fallback.
    pub fn load(blob: &B, key: &str) -> Result<Vec<Node>, StoreError> {
        let Some(raw) = blob.get(key)? else {
            return Ok(Vec::new());
        };

        let nodes: Vec<Node> =
            serde_json::from_str(&raw).map_err(|e| StoreError::StorageCorrupt {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        if let Some(duplicate) = find_duplicate_id(&nodes) {
            return Err(StoreError::StorageCorrupt {
                key: key.to_string(),
                message: format!("duplicate node id '{}'", duplicate),
            });
        }

        Ok(nodes)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Saved nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get_by_id(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.position(id).is_some()
    }

    pub fn state_of(&self, id: &NodeId) -> NodeState {
        if self.contains(id) {
            NodeState::Saved
        } else {
            NodeState::Unsaved
        }
    }

    /// The node currently being edited, if any.
    pub fn active(&self) -> Option<&Node> {
        self.active.as_ref()
    }

    /// Replaces the active node value. No validation happens here.
    pub fn set_active(&mut self, node: Node) {
        self.active = Some(node);
    }

    /// Applies a copy-on-write edit to the active node and makes the result active.
    pub fn edit_active<F>(&mut self, edit: F) -> Result<&Node, StoreError>
    where
        F: FnOnce(&Node) -> Result<Node, NodeError>,
    {
        let current = self.active.as_ref().ok_or(StoreError::NoActiveNode)?;
        let edited = edit(current)?;
        Ok(&*self.active.insert(edited))
    }

    /// Discards the active node and starts a fresh default node of `kind`.
    pub fn switch_kind(&mut self, kind: NodeKind) -> &Node {
        self.active.insert(Node::new(kind))
    }

    /// Creates or updates `node` in the collection and persists it.
    ///
    /// The store does not validate; callers check [`Node::is_valid`] first
    /// (or use [`NodeStore::save_active`]).
    pub fn save(&mut self, node: Node) -> OperationResult {
        let kind = node.kind();
        let result = match self.position(node.id()) {
            Some(index) => {
                debug!(id = %node.id(), "Updating node");
                self.nodes[index] = node;
                OperationResult::updated(kind)
            }
            None => {
                debug!(id = %node.id(), "Creating node");
                self.nodes.push(node);
                OperationResult::created(kind)
            }
        };
        self.persist();
        result
    }

    /// Validates the active node and saves it.
    pub fn save_active(&mut self) -> Result<OperationResult, StoreError> {
        let node = self.active.clone().ok_or(StoreError::NoActiveNode)?;
        node.validate()?;
        Ok(self.save(node))
    }

    /// Removes the node with `id`.
    ///
    /// If it was the active node, the first remaining node becomes active, or
    /// none if the collection is now empty.
    pub fn delete(&mut self, id: &NodeId) -> OperationResult {
        let Some(index) = self.position(id) else {
            return OperationResult::not_found();
        };

        let removed = self.nodes.remove(index);
        debug!(id = %id, "Deleted node");

        if self.active.as_ref().is_some_and(|active| active.id() == id) {
            self.active = self.nodes.first().cloned();
        }

        self.persist();
        OperationResult::deleted(removed.kind())
    }

    /// Writes the whole collection to the blob store.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.nodes).map_err(|e| StoreError::StorageCorrupt {
            key: self.key.clone(),
            message: e.to_string(),
        })?;
        self.blob.set(&self.key, &blob)?;
        Ok(())
    }

    pub fn blob(&self) -> &B {
        &self.blob
    }

    pub fn into_blob(self) -> B {
        self.blob
    }

    fn persist(&mut self) {
        match self.flush() {
            Ok(()) => debug!(key = %self.key, count = self.nodes.len(), "Persisted nodes"),
            // The in-memory collection stays authoritative; the next mutation retries.
            Err(e) => error!(key = %self.key, error = %e, "Failed to persist nodes"),
        }
    }

    fn position(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }
}

fn find_duplicate_id(nodes: &[Node]) -> Option<&NodeId> {
    let mut seen = AHashSet::with_capacity(nodes.len());
    nodes
        .iter()
        .map(Node::id)
        .find(|id| !seen.insert(*id))
}
