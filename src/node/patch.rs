use super::content::{MessageData, Node, NodeContent, QuestionData};
use super::kind::NodeKind;
use crate::error::NodeError;
use serde::{Deserialize, Serialize};

/// A partial update of a node's data. Absent fields are left as they are.
///
/// Patches are checked against the node's variant when applied: a patch that
/// sets `question` on a greeting is rejected with [`NodeError::InvalidVariant`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl DataPatch {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn question(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            ..Self::default()
        }
    }

    pub fn options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: Some(options.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.question.is_none() && self.options.is_none()
    }

    /// Names of the fields this patch sets.
    fn present_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        [
            ("message", self.message.is_some()),
            ("question", self.question.is_some()),
            ("options", self.options.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
    }

    fn check_variant(&self, kind: NodeKind) -> Result<(), NodeError> {
        match self.present_fields().find(|field| !kind.has_field(field)) {
            Some(field) => Err(NodeError::InvalidVariant {
                kind,
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl Node {
    /// Returns a new node whose data is the shallow merge of this node's data and `patch`.
    ///
    /// The id and kind are preserved. An empty patch yields an equal node.
    pub fn update_field(&self, patch: &DataPatch) -> Result<Node, NodeError> {
        patch.check_variant(self.kind())?;

        let content = match self.content() {
            NodeContent::Greeting(data) => NodeContent::Greeting(merge_message(data, patch)),
            NodeContent::Information(data) => NodeContent::Information(merge_message(data, patch)),
            NodeContent::Question(data) => NodeContent::Question(QuestionData {
                question: patch.question.clone().unwrap_or_else(|| data.question.clone()),
                options: patch.options.clone().unwrap_or_else(|| data.options.clone()),
            }),
        };
        Ok(self.with_content(content))
    }

    /// Appends an answer option. The text is trimmed; blank text leaves the node unchanged.
    pub fn add_option(&self, text: &str) -> Result<Node, NodeError> {
        let data = self.question_data("options")?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(self.clone());
        }

        let mut options = data.options.clone();
        options.push(text.to_string());
        self.update_field(&DataPatch::options(options))
    }

    /// Replaces the option at `index` with `text` as typed.
    pub fn set_option(&self, index: usize, text: &str) -> Result<Node, NodeError> {
        let data = self.question_data("options")?;
        let mut options = data.options.clone();
        let len = options.len();
        let slot = options
            .get_mut(index)
            .ok_or(NodeError::OptionOutOfRange { index, len })?;
        *slot = text.to_string();
        self.update_field(&DataPatch::options(options))
    }

    /// Removes the option at `index`.
    pub fn remove_option(&self, index: usize) -> Result<Node, NodeError> {
        let data = self.question_data("options")?;
        if index >= data.options.len() {
            return Err(NodeError::OptionOutOfRange {
                index,
                len: data.options.len(),
            });
        }

        let mut options = data.options.clone();
        options.remove(index);
        self.update_field(&DataPatch::options(options))
    }

    fn question_data(&self, field: &str) -> Result<&QuestionData, NodeError> {
        match self.content() {
            NodeContent::Question(data) => Ok(data),
            _ => Err(NodeError::InvalidVariant {
                kind: self.kind(),
                field: field.to_string(),
            }),
        }
    }
}

fn merge_message(data: &MessageData, patch: &DataPatch) -> MessageData {
    MessageData {
        message: patch.message.clone().unwrap_or_else(|| data.message.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::create_default;

    #[test]
    fn message_patch_updates_greeting() {
        let node = create_default(NodeKind::Greeting);
        let updated = node.update_field(&DataPatch::message("Good morning!")).unwrap();
        assert_eq!(updated.id(), node.id());
        assert_eq!(
            updated.content(),
            &NodeContent::Greeting(MessageData {
                message: "Good morning!".to_string()
            })
        );
        // The original value is untouched.
        assert_ne!(node, updated);
    }

    #[test]
    fn foreign_field_is_invalid_variant() {
        let node = create_default(NodeKind::Information);
        let err = node
            .update_field(&DataPatch::question("Why?"))
            .unwrap_err();
        assert_eq!(
            err,
            NodeError::InvalidVariant {
                kind: NodeKind::Information,
                field: "question".to_string()
            }
        );
    }

    #[test]
    fn empty_patch_is_noop() {
        let node = create_default(NodeKind::Question);
        assert!(DataPatch::default().is_empty());
        assert_eq!(node.update_field(&DataPatch::default()).unwrap(), node);
    }

    #[test]
    fn patch_rejects_unknown_json_keys() {
        let parsed: Result<DataPatch, _> = serde_json::from_str(r#"{"title":"x"}"#);
        assert!(parsed.is_err());

        let parsed: DataPatch = serde_json::from_str(r#"{"question":"Ok?"}"#).unwrap();
        assert_eq!(parsed, DataPatch::question("Ok?"));
    }

    #[test]
    fn option_editing() {
        let node = create_default(NodeKind::Question);

        let added = node.add_option("  Maybe later ").unwrap();
        let blank = added.add_option("   ").unwrap();
        assert_eq!(blank, added);

        let renamed = added.set_option(0, "Absolutely").unwrap();
        let removed = renamed.remove_option(1).unwrap();
        match removed.content() {
            NodeContent::Question(data) => {
                assert_eq!(data.options, vec!["Absolutely", "Tell me more", "Maybe later"]);
            }
            other => panic!("unexpected content {:?}", other),
        }

        assert_eq!(
            removed.remove_option(7),
            Err(NodeError::OptionOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn option_editing_requires_question() {
        let node = create_default(NodeKind::Greeting);
        assert!(matches!(
            node.add_option("Yes"),
            Err(NodeError::InvalidVariant { .. })
        ));
    }
}
