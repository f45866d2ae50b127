//! # Script Builder - Conversation Node Model and Store
//!
//! **Script Builder** is the core of a voice-script editor. A script is made of
//! conversation nodes of three fixed kinds (greeting, question, information);
//! this crate defines those nodes, their validity rules, and a small persistent
//! store that keeps the saved nodes plus the one currently being edited.
//!
//! ## Core Workflow
//!
//! The crate is UI-agnostic. A front end drives it like this:
//!
//! 1.  **Open a Store**: Create a [`NodeStore`](store::NodeStore) over a
//!     [`BlobStore`](storage::BlobStore). The collection is loaded once; an
//!     unreadable blob is logged and replaced by an empty collection.
//! 2.  **Edit the Active Node**: Every edit (`update_field`, `add_option`, ...)
//!     returns a new node value with the same id. Nodes are never mutated in place.
//! 3.  **Validate and Save**: `save_active` refuses invalid nodes with field-level
//!     issues; valid ones are created or updated and the whole collection is persisted.
//! 4.  **Ask for Suggestions**: An [`Assistant`](assist::Assistant) reviews a node
//!     and proposes improvements, which are applied back through the node model.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use script_builder::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Open a store backed by files in `./data`.
//!     let blob = FileBlobStore::open("data")?;
//!     let mut store = NodeStore::with_default_key(blob);
//!
//!     // 2. Start a new question and edit it.
//!     store.switch_kind(NodeKind::Question);
//!     store.edit_active(|node| node.update_field(&DataPatch::question("Shall we call back later?")))?;
//!     store.edit_active(|node| node.add_option("Maybe next week"))?;
//!
//!     // 3. Save it. Invalid nodes are rejected with per-field issues.
//!     let result = store.save_active()?;
//!     println!("{}", result.message);
//!
//!     // 4. Ask the assistant for an improvement and apply the first one.
//!     let session = AssistSession::new(CannedAssistant::default());
//!     let active = store.active().cloned().expect("a node was just saved");
//!     let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;
//!     let report = runtime.block_on(session.analyze(&active))?;
//!     if let Some(improvement) = report.improvements.first() {
//!         let improved = apply_improvement(&active, improvement)?;
//!         store.set_active(improved);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod assist;
pub mod config;
pub mod error;
pub mod node;
pub mod notify;
pub mod prelude;
pub mod storage;
pub mod store;
