use super::{AnalysisReport, Assistant, Improvement};
use crate::config::Settings;
use crate::node::{Node, NodeContent, NodeKind};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const DETAILED_GREETING: &str = "Hello, I'm calling from Caantin AI. We're an AI voice solutions company helping businesses across Africa automate their customer interactions. How can I assist you today with our services?";
const DETAILED_INFORMATION: &str = "We offer intelligent voice solutions for businesses across Africa. Our AI-powered systems can handle customer inquiries, appointment scheduling, and satisfaction surveys with natural-sounding voices in multiple languages, reducing your operational costs while improving customer experience.";

const GREETING_FIELD_SUGGESTION: &str = "Hello! I'm calling from Caantin AI. We're excited to share how our voice solutions can transform your business operations across Africa. How are you doing today?";
const QUESTION_FIELD_SUGGESTION: &str = "Would you be interested in learning how our AI voice solutions could reduce your customer service costs by up to 40%?";
const OPTION_FIELD_SUGGESTION: &str = "I'd like to hear more specific details";
const INFORMATION_FIELD_SUGGESTION: &str = "Caantin AI's voice solutions are deployed across 12 African countries, serving over 200 businesses in banking, healthcare, and retail. Our technology handles over 100,000 customer interactions daily with a 95% satisfaction rate, saving our clients an average of 32 hours of staff time per week.";

const SHORT_GREETING_CHARS: usize = 50;
const BRIEF_INFORMATION_WORDS: usize = 15;

/// An offline assistant that answers from fixed heuristics after a delay,
/// standing in for a remote model.
#[derive(Debug, Clone)]
pub struct CannedAssistant {
    analysis_delay: Duration,
    suggestion_delay: Duration,
}

impl Default for CannedAssistant {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl CannedAssistant {
    pub fn new(analysis_delay: Duration, suggestion_delay: Duration) -> Self {
        Self {
            analysis_delay,
            suggestion_delay,
        }
    }

    /// Answers without any simulated latency.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.analysis_delay(), settings.suggestion_delay())
    }
}

#[async_trait]
impl Assistant for CannedAssistant {
    async fn analyze(&self, node: &Node) -> AnalysisReport {
        simulate_latency(self.analysis_delay).await;
        let report = analyze_node(node);
        debug!(id = %node.id(), message = %report.message, "Canned analysis finished");
        report
    }

    async fn suggest_field(&self, node: &Node, field: &str) -> String {
        simulate_latency(self.suggestion_delay).await;
        field_suggestion(node.kind(), field).to_string()
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn analyze_node(node: &Node) -> AnalysisReport {
    let mut report = AnalysisReport::complete();

    match node.content() {
        NodeContent::Greeting(data) => {
            if data.message.chars().count() < SHORT_GREETING_CHARS {
                report.message = "Your greeting message could be more detailed".to_string();
                report.suggestions = strings(&[
                    "Add a personalized introduction",
                    "Mention the purpose of the call",
                    "Include a brief company introduction",
                ]);
                report.improvements = vec![Improvement {
                    field: "message".to_string(),
                    suggestion: DETAILED_GREETING.to_string(),
                }];
            } else if data.message.contains("help") {
                report.message = "Great helpful tone in your greeting".to_string();
                report.suggestions = strings(&["Consider adding a brief pause after introduction"]);
            }
        }
        NodeContent::Question(data) => {
            if data.options.len() <= 2 {
                report.message = "Consider adding more response options".to_string();
                report.suggestions = strings(&[
                    "Add more nuanced options",
                    "Include a 'not sure' option",
                    "Allow users to request more information",
                ]);
                report.improvements = vec![Improvement {
                    field: "options".to_string(),
                    suggestion: "Maybe later".to_string(),
                }];
            }

            // A missing question mark outranks the option advice, but keeps its improvement.
            if !data.question.ends_with('?') {
                report.message = "Your question doesn't include a question mark".to_string();
                report.suggestions = strings(&[
                    "Add a question mark",
                    "Rephrase to make it clearer it's a question",
                ]);
            }
        }
        NodeContent::Information(data) => {
            if data.message.split(' ').count() < BRIEF_INFORMATION_WORDS {
                report.message = "Your information seems brief".to_string();
                report.suggestions = strings(&[
                    "Add more specific details about your services",
                    "Include a benefit statement",
                    "Consider adding context around your information",
                ]);
                report.improvements = vec![Improvement {
                    field: "message".to_string(),
                    suggestion: DETAILED_INFORMATION.to_string(),
                }];
            }
        }
    }

    report
}

fn field_suggestion(kind: NodeKind, field: &str) -> &'static str {
    match (kind, field) {
        (NodeKind::Greeting, "message") => GREETING_FIELD_SUGGESTION,
        (NodeKind::Question, "question") => QUESTION_FIELD_SUGGESTION,
        (NodeKind::Question, "options") => OPTION_FIELD_SUGGESTION,
        (NodeKind::Information, "message") => INFORMATION_FIELD_SUGGESTION,
        _ => "",
    }
}
