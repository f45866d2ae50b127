use crate::node::NodeKind;
use crate::notify::{Notification, NotificationKind};

/// What a store operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Created,
    Updated,
    Deleted,
    NotFound,
}

/// The user-facing result of a save or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
    pub action: StoreAction,
}

impl OperationResult {
    pub(crate) fn created(kind: NodeKind) -> Self {
        Self {
            success: true,
            message: format!("New {} node created successfully", kind),
            action: StoreAction::Created,
        }
    }

    pub(crate) fn updated(kind: NodeKind) -> Self {
        Self {
            success: true,
            message: format!("{} node updated successfully", kind),
            action: StoreAction::Updated,
        }
    }

    pub(crate) fn deleted(kind: NodeKind) -> Self {
        Self {
            success: true,
            message: format!("{} node deleted successfully", kind),
            action: StoreAction::Deleted,
        }
    }

    pub(crate) fn not_found() -> Self {
        Self {
            success: false,
            message: "Node not found".to_string(),
            action: StoreAction::NotFound,
        }
    }

    /// The notification to show for this result.
    pub fn notification(&self) -> Notification {
        let (title, kind) = match self.action {
            StoreAction::Created | StoreAction::Updated => ("Node Saved", NotificationKind::Success),
            StoreAction::Deleted => ("Node Deleted", NotificationKind::Success),
            StoreAction::NotFound => ("Error", NotificationKind::Destructive),
        };
        Notification::new(title, self.message.clone()).with_kind(kind)
    }
}
