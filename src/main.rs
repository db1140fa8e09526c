//! mebot - persona chat agent CLI.
//!
//! Usage:
//!   mebot --name "Ada" -p "What do you work on?"
//!   mebot --name "Ada"   # interactive REPL mode

use mebot::agent::{Agent, TurnStats};
use mebot::config::Config;
use mebot::llm::Client;
use mebot::notify::{LogNotifier, Notifier, PushoverNotifier};
use mebot::persona::Persona;
use mebot::tools::ToolRegistry;

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// mebot - answers website questions as the configured persona
#[derive(Parser)]
#[command(name = "mebot", about = "Persona chat agent")]
struct Args {
    #[arg(short, long, help = "One-shot prompt mode")]
    prompt: Option<String>,

    #[arg(long, env = "PERSONA_NAME", help = "Name of the represented person")]
    name: String,

    #[arg(
        long,
        env = "MEBOT_DATA_DIR",
        default_value = "data",
        help = "Directory holding summary.txt, linkedin.pdf and resume.pdf"
    )]
    data_dir: PathBuf,

    #[arg(long, help = "Override the chat-completions base URL")]
    base_url: Option<String>,

    #[arg(long, help = "Override the model name")]
    model: Option<String>,

    #[arg(long, help = "API key (otherwise GEMINI_API_KEY / OPENAI_API_KEY)")]
    api_key: Option<String>,
}

/// Get the path to the history file
fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mebot")
        .join("history")
}

/// Print turn stats to stderr
fn print_stats(duration: Duration, stats: &TurnStats) {
    let tokens = stats.total_tokens();
    let token_display = if tokens >= 1000 {
        format!("{:.1}k", tokens as f64 / 1000.0)
    } else {
        tokens.to_string()
    };
    eprintln!(
        "[Duration: {:.1}s | Tokens: {} | Tools: {}]",
        duration.as_secs_f64(),
        token_display,
        stats.tool_uses
    );
}

fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let cfg = Config::resolve(
        args.base_url.as_deref(),
        args.model.as_deref(),
        args.api_key.as_deref(),
    )?;

    // Loading the persona documents is fatal on failure: there is no agent
    // to run without them.
    let persona = Persona::load(&args.name, &args.data_dir)?;

    let notifier: Arc<dyn Notifier> = match PushoverNotifier::from_env() {
        Some(p) => Arc::new(p),
        None => {
            eprintln!("[notify] PUSHOVER_TOKEN/PUSHOVER_USER not set, logging to stderr");
            Arc::new(LogNotifier)
        }
    };

    let registry = ToolRegistry::builtin(notifier);
    let client = Client::new(&cfg.base_url, &cfg.api_key)?;
    let agent = Agent::new(Box::new(client), registry, persona, &cfg.model);

    if let Some(prompt) = &args.prompt {
        run_once(&agent, prompt)
    } else {
        run_repl(&agent, &args.name)
    }
}

fn run_once(agent: &Agent, prompt: &str) -> Result<()> {
    let start = Instant::now();
    let result = agent.run_turn(prompt, &[])?;
    println!("{}", result.reply);
    print_stats(start.elapsed(), &result.stats);
    Ok(())
}

fn run_repl(agent: &Agent, name: &str) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut history: Vec<Value> = Vec::new();

    // Load command history
    let history_file = history_path();
    let _ = rl.load_history(&history_file);

    println!("mebot - chatting as {}. /help for commands, /exit to quit", name);

    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                if line.starts_with('/') {
                    if handle_command(line, &mut history) {
                        break;
                    }
                    continue;
                }

                let start = Instant::now();
                match agent.run_turn(line, &history) {
                    Ok(result) => {
                        println!("{}", result.reply);
                        print_stats(start.elapsed(), &result.stats);

                        // Only the user message and the final answer persist
                        // across turns; tool exchanges stay within the turn.
                        history.push(json!({"role": "user", "content": line}));
                        history.push(json!({"role": "assistant", "content": result.reply}));
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    // Save command history
    if let Some(parent) = history_file.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = rl.save_history(&history_file);

    Ok(())
}

fn handle_command(cmd: &str, history: &mut Vec<Value>) -> bool {
    match cmd.split_whitespace().next().unwrap_or(cmd) {
        "/exit" | "/quit" => return true,
        "/help" => {
            println!("Commands:");
            println!("  /exit           - quit");
            println!("  /help           - show commands");
            println!("  /clear          - clear conversation");
        }
        "/clear" => {
            history.clear();
            println!("Conversation cleared");
        }
        other => {
            println!("Unknown command: {}", other);
        }
    }
    false
}
