use clap::Parser;
use rand::Rng;
use rand::seq::IndexedRandom;
use script_builder::node::{
    MIN_QUESTION_OPTIONS, MessageData, Node, NodeContent, NodeId, QuestionData,
};
use script_builder::storage::{BlobStore, FileBlobStore};
use script_builder::store::DEFAULT_STORAGE_KEY;
use std::path::{Path, PathBuf};

/// A CLI tool to generate node collections for seeding a script-builder data directory
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to write the generated collection into
    #[arg(short, long, default_value = "generated_data")]
    output: PathBuf,

    /// Storage key (file name without extension) of the collection
    #[arg(short, long, default_value = DEFAULT_STORAGE_KEY)]
    key: String,

    /// Number of nodes to generate
    #[arg(short, long, default_value_t = 20)]
    count: usize,

    /// Minimum number of answer options per question
    #[arg(long, default_value_t = 2)]
    min_options: usize,

    /// Maximum number of answer options per question
    #[arg(long, default_value_t = 5)]
    max_options: usize,
}

const GREETINGS: [&str; 4] = [
    "Hello, I'm calling from Caantin AI. How can I help you today?",
    "Good morning! This is your assistant from Caantin AI.",
    "Hi there, thanks for picking up. Do you have a minute?",
    "Welcome back! How was your experience with us last time?",
];

const QUESTIONS: [&str; 4] = [
    "Would you like to know more about our services?",
    "Which of our products are you most interested in?",
    "How satisfied were you with your last call?",
    "Shall we schedule a follow-up call",
];

const OPTIONS: [&str; 8] = [
    "Yes",
    "No",
    "Tell me more",
    "Maybe later",
    "Not sure",
    "Call me back",
    "Very satisfied",
    "Send me an email",
];

const INFORMATION: [&str; 3] = [
    "We offer intelligent voice solutions for businesses across Africa.",
    "Our systems handle customer inquiries, appointment scheduling, and satisfaction surveys in multiple languages.",
    "Support is available around the clock.",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if let Err(message) = check_option_range(cli.min_options, cli.max_options) {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }

    println!(
        "Generating {} node(s) (options per question: {} to {})...",
        cli.count, cli.min_options, cli.max_options
    );

    let nodes: Vec<Node> = (0..cli.count)
        .map(|_| generate_node(&mut rng, cli.min_options, cli.max_options))
        .collect();
    let path = write_collection(&cli.output, &cli.key, &nodes)?;

    println!(
        "Successfully generated and saved {} node(s) to '{}'",
        nodes.len(),
        path.display()
    );

    Ok(())
}

/// Generated questions must pass validation, and the range must not be inverted.
fn check_option_range(min_options: usize, max_options: usize) -> Result<(), String> {
    if min_options < MIN_QUESTION_OPTIONS {
        return Err(format!(
            "--min-options ({}) must be at least {}",
            min_options, MIN_QUESTION_OPTIONS
        ));
    }
    if min_options > max_options {
        return Err(format!(
            "--min-options ({}) cannot be greater than --max-options ({})",
            min_options, max_options
        ));
    }
    Ok(())
}

/// Writes `nodes` as the blob under `key` in `output` and returns the file written.
fn write_collection(
    output: &Path,
    key: &str,
    nodes: &[Node],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut blob = FileBlobStore::open(output)?;
    blob.set(key, &serde_json::to_string_pretty(nodes)?)?;
    Ok(blob.root().join(format!("{}.json", key)))
}

fn generate_node<R: Rng>(rng: &mut R, min_options: usize, max_options: usize) -> Node {
    let content = match rng.random_range(0..3) {
        0 => NodeContent::Greeting(MessageData {
            message: pick(rng, &GREETINGS),
        }),
        1 => {
            let count = rng.random_range(min_options..=max_options).min(OPTIONS.len());
            NodeContent::Question(QuestionData {
                question: pick(rng, &QUESTIONS),
                options: OPTIONS
                    .choose_multiple(rng, count)
                    .map(|s| s.to_string())
                    .collect(),
            })
        }
        _ => NodeContent::Information(MessageData {
            message: pick(rng, &INFORMATION),
        }),
    };
    Node::from_parts(NodeId::generate(), content)
}

fn pick<R: Rng>(rng: &mut R, items: &[&str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}
