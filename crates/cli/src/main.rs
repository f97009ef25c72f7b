use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use campus_agents::{ChatSession, BANNER};
use campus_core::{classify_intent, reply_for, RULES};
use campus_observability::{init_tracing, AppMetrics};
use campus_storage::{ChatHistory, History, DEFAULT_HISTORY_FILE};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "chatbot")]
#[command(about = "Rule-based college information chatbot")]
struct Cli {
    #[arg(long, env = "CAMPUS_HISTORY_FILE", default_value = DEFAULT_HISTORY_FILE)]
    history_file: PathBuf,

    /// Keep the transcript in memory only.
    #[arg(long, env = "CAMPUS_NO_HISTORY")]
    no_history: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive session (default).
    Chat,
    /// Answer a single question and exit.
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the ordered rule table.
    Rules,
    /// Show the most recent history records.
    History {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    init_tracing("campus_cli");
    let cli = Cli::parse();

    let history = if cli.no_history {
        History::memory()
    } else {
        History::file(&cli.history_file)
    };

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => run_chat(history)?,
        Command::Ask { text, json } => {
            let text = text.join(" ");
            let intent = classify_intent(&text);
            let reply = reply_for(intent);

            if json {
                let payload = serde_json::json!({ "intent": intent, "reply": reply });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("Chatbot: {reply}");
            }
        }
        Command::Rules => {
            println!("{}", serde_json::to_string_pretty(RULES)?);
        }
        Command::History { limit } => {
            let records = history
                .recent(limit)
                .with_context(|| format!("failed loading history from {}", history.describe()))?;
            for record in records {
                println!("{record}");
            }
        }
    }

    Ok(())
}

fn run_chat(history: History) -> Result<()> {
    println!("{BANNER}");
    tracing::info!(history = %history.describe(), "starting chat session");

    let session = ChatSession::new(history, AppMetrics::shared());
    let stdin = io::stdin();
    let stdout = io::stdout();

    session
        .run(stdin.lock(), stdout.lock())
        .context("chat console failed")?;

    Ok(())
}
