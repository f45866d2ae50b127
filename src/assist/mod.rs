//! The suggestion assistant seam.
//!
//! An [`Assistant`] looks at a node and proposes better wording. The crate
//! ships [`CannedAssistant`], which answers from fixed heuristics after a
//! short delay; a real backend implements the same trait.

use crate::error::{AssistError, NodeError};
use crate::node::{DataPatch, Node};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

mod canned;

pub use canned::CannedAssistant;

/// A proposed replacement (or, for `options`, an addition) for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub field: String,
    pub suggestion: String,
}

/// The outcome of analysing a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<Improvement>,
}

impl AnalysisReport {
    /// A successful report with no findings.
    pub fn complete() -> Self {
        Self {
            success: true,
            message: "Node analysis complete".to_string(),
            suggestions: Vec::new(),
            improvements: Vec::new(),
        }
    }
}

#[async_trait]
pub trait Assistant: Send + Sync {
    /// Reviews the whole node.
    async fn analyze(&self, node: &Node) -> AnalysisReport;

    /// Proposes text for a single field. Empty when there is nothing to suggest.
    async fn suggest_field(&self, node: &Node, field: &str) -> String;
}

/// Applies an improvement to a node, returning the edited copy.
///
/// `message` and `question` are replaced; for `options` the suggestion is
/// appended as a new answer option.
pub fn apply_improvement(node: &Node, improvement: &Improvement) -> Result<Node, NodeError> {
    let suggestion = improvement.suggestion.clone();
    match improvement.field.as_str() {
        "message" => node.update_field(&DataPatch::message(suggestion)),
        "question" => node.update_field(&DataPatch::question(suggestion)),
        "options" => node.add_option(&suggestion),
        other => Err(NodeError::UnknownField(other.to_string())),
    }
}

/// Wraps an assistant and tracks the outstanding analysis.
///
/// Only one analysis runs at a time: asking again while one is pending fails
/// fast with [`AssistError::AnalysisPending`] instead of racing the first.
pub struct AssistSession<A> {
    assistant: A,
    analyzing: AtomicBool,
    last_analysis: Mutex<Option<AnalysisReport>>,
}

impl<A: Assistant> AssistSession<A> {
    pub fn new(assistant: A) -> Self {
        Self {
            assistant,
            analyzing: AtomicBool::new(false),
            last_analysis: Mutex::new(None),
        }
    }

    pub async fn analyze(&self, node: &Node) -> Result<AnalysisReport, AssistError> {
        if self.analyzing.swap(true, Ordering::AcqRel) {
            return Err(AssistError::AnalysisPending);
        }
        // Cleared on drop so a cancelled analysis does not wedge the session.
        let _pending = PendingFlag(&self.analyzing);

        let report = self.assistant.analyze(node).await;
        *self.last_analysis.lock() = Some(report.clone());
        Ok(report)
    }

    pub async fn suggest_field(&self, node: &Node, field: &str) -> String {
        self.assistant.suggest_field(node, field).await
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing.load(Ordering::Acquire)
    }

    pub fn last_analysis(&self) -> Option<AnalysisReport> {
        self.last_analysis.lock().clone()
    }

    pub fn assistant(&self) -> &A {
        &self.assistant
    }
}

struct PendingFlag<'a>(&'a AtomicBool);

impl Drop for PendingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
