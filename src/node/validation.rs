use super::content::{MessageData, Node, NodeContent, QuestionData};
use crate::error::{FieldIssue, ValidationErrors};
use serde::Deserialize;

/// Minimum number of answer options a question needs.
pub const MIN_QUESTION_OPTIONS: usize = 2;

impl Node {
    /// Checks the node against the per-variant rules and reports every problem found.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut issues = Vec::new();
        match self.content() {
            NodeContent::Greeting(data) => check_message(data, "Greeting", &mut issues),
            NodeContent::Information(data) => check_message(data, "Information", &mut issues),
            NodeContent::Question(data) => check_question(data, &mut issues),
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { issues })
        }
    }

    /// Whether the node may be saved. Invalid nodes are allowed to exist while
    /// being edited; only saving is gated on this.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validity check for untyped input. Anything that is not a well-formed
    /// node counts as invalid.
    pub fn is_valid_json(value: &serde_json::Value) -> bool {
        Node::deserialize(value).is_ok_and(|node| node.is_valid())
    }
}

fn check_message(data: &MessageData, label: &str, issues: &mut Vec<FieldIssue>) {
    if data.message.trim().is_empty() {
        issues.push(FieldIssue {
            field: "message".to_string(),
            message: format!("{} message is required", label),
        });
    }
}

fn check_question(data: &QuestionData, issues: &mut Vec<FieldIssue>) {
    if data.question.trim().is_empty() {
        issues.push(FieldIssue {
            field: "question".to_string(),
            message: "Question text is required".to_string(),
        });
    }

    if data.options.len() < MIN_QUESTION_OPTIONS {
        issues.push(FieldIssue {
            field: "options".to_string(),
            message: format!("At least {} options required", MIN_QUESTION_OPTIONS),
        });
    }

    for (index, option) in data.options.iter().enumerate() {
        if option.trim().is_empty() {
            issues.push(FieldIssue {
                field: format!("options[{}]", index),
                message: "Option cannot be empty".to_string(),
            });
        }
    }
}
