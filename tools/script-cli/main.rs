use clap::{Parser, Subcommand, ValueEnum};
use script_builder::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindCli {
    Greeting,
    Question,
    Information,
}

impl From<KindCli> for NodeKind {
    fn from(kind: KindCli) -> Self {
        match kind {
            KindCli::Greeting => NodeKind::Greeting,
            KindCli::Question => NodeKind::Question,
            KindCli::Information => NodeKind::Information,
        }
    }
}

/// Build and manage voice-script conversation nodes from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional path to a settings JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Directory holding the node collection (overrides the settings file)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all saved nodes
    List,
    /// Create and save a new node with default content
    New {
        #[arg(value_enum)]
        kind: KindCli,
    },
    /// Print a saved node as JSON
    Show { id: String },
    /// Edit a saved node and save it again if it is still valid
    Edit {
        id: String,
        /// New message text (greeting and information nodes)
        #[arg(long)]
        message: Option<String>,
        /// New question text (question nodes)
        #[arg(long)]
        question: Option<String>,
        /// Replace the answer options; repeat the flag once per option
        #[arg(long = "option")]
        options: Vec<String>,
    },
    /// Delete a saved node
    Delete { id: String },
    /// Check a saved node against the validation rules
    Validate { id: String },
    /// Ask the canned assistant to review a saved node
    Analyze {
        id: String,
        /// Apply the suggested improvements and save the result
        #[arg(long)]
        apply: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        exit_with_error(&e.to_string());
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }

    let blob = FileBlobStore::open(&settings.data_dir)?;
    let mut store = NodeStore::open(blob, settings.storage_key.clone());
    let notifier = Notifier::new();

    match cli.command {
        Command::List => {
            if store.is_empty() {
                println!("No saved nodes in '{}'.", settings.data_dir.display());
            }
            for node in store.nodes() {
                let marker = if node.is_valid() { " " } else { "!" };
                println!("{} {:<12} {}  {}", marker, node.kind(), node.id(), summary(node));
            }
        }
        Command::New { kind } => {
            let node = Node::new(kind.into());
            let id = node.id().clone();
            let result = store.save(node);
            report(&notifier, &result, &settings);
            println!("  -> id: {}", id);
        }
        Command::Show { id } => {
            let node = find(&store, &id)?;
            println!("{}", serde_json::to_string_pretty(node)?);
        }
        Command::Edit {
            id,
            message,
            question,
            options,
        } => {
            let node = find(&store, &id)?.clone();
            let patch = DataPatch {
                message,
                question,
                options: (!options.is_empty()).then_some(options),
            };
            if patch.is_empty() {
                return Err("Nothing to change: pass --message, --question or --option".into());
            }

            store.set_active(node.update_field(&patch)?);
            let result = store.save_active()?;
            report(&notifier, &result, &settings);
        }
        Command::Delete { id } => {
            let result = store.delete(&NodeId::from(id));
            report(&notifier, &result, &settings);
            if !result.success {
                std::process::exit(1);
            }
        }
        Command::Validate { id } => match find(&store, &id)?.validate() {
            Ok(()) => println!("Node '{}' is valid.", id),
            Err(errors) => {
                println!("Node '{}' is invalid:", id);
                for issue in &errors.issues {
                    println!("  -> {}", issue);
                }
                std::process::exit(1);
            }
        },
        Command::Analyze { id, apply } => {
            let node = find(&store, &id)?.clone();
            let session = AssistSession::new(CannedAssistant::from_settings(&settings));
            let runtime = tokio::runtime::Runtime::new()?;

            println!("Analyzing {} node '{}'...", node.kind(), id);
            let analysis = runtime.block_on(session.analyze(&node))?;
            println!("\n{}", analysis.message);
            for suggestion in &analysis.suggestions {
                println!("  - {}", suggestion);
            }
            for improvement in &analysis.improvements {
                println!("  -> {}: {}", improvement.field, improvement.suggestion);
            }

            if apply && !analysis.improvements.is_empty() {
                let improved = analysis
                    .improvements
                    .iter()
                    .try_fold(node, |node, improvement| apply_improvement(&node, improvement))?;
                store.set_active(improved);
                let result = store.save_active()?;
                report(&notifier, &result, &settings);
            }
        }
    }

    Ok(())
}

fn find<'a, B: BlobStore>(store: &'a NodeStore<B>, id: &str) -> Result<&'a Node> {
    store
        .get_by_id(&NodeId::from(id))
        .ok_or_else(|| format!("Node '{}' not found", id).into())
}

fn summary(node: &Node) -> String {
    match node.content() {
        NodeContent::Greeting(data) | NodeContent::Information(data) => data.message.clone(),
        NodeContent::Question(data) => {
            format!("{} [{}]", data.question, data.options.join(" | "))
        }
    }
}

/// Prints an operation result the way the editor's notification would show it.
fn report(notifier: &Notifier, result: &OperationResult, settings: &Settings) {
    notifier.show(
        result
            .notification()
            .with_duration(settings.notification_duration()),
    );
    let state = notifier.state();
    if let Some(notification) = state.current {
        println!("{}: {}", notification.title, notification.description);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
