use anyhow::{Context, Result};
use clap::Parser;
use file_explorer::prelude::*;
use log::{debug, info};
use std::path::PathBuf;

/// Browse and edit an in-memory file tree from the terminal
#[derive(Debug, Parser)]
#[command(name = "file-explorer", version, about, long_about = None)]
struct Cli {
    /// Path to a JSON configuration file (defaults apply if it is missing)
    #[arg(short, long, default_value = "file-explorer.json")]
    config: PathBuf,

    /// JSON file with the initial tree, overriding the configured seed
    #[arg(short, long)]
    seed: Option<PathBuf>,
}

const HELP: &str = "\
commands:
  ls               show the visible tree
  toggle <id>      expand/collapse a folder
  select <id>      select a node (selecting a file previews it)
  new-file         create a file in the selected folder
  new-folder       create a folder in the selected folder
  rename           rename the selected node
  delete           delete the selected node
  preview          show the previewed file
  help             show this help
  quit             exit";

/// Asks for names on the terminal
struct TerminalPrompt;

impl NamePrompt for TerminalPrompt {
    fn prompt_for_name(&mut self, request: &NameRequest) -> Option<String> {
        let mut input = dialoguer::Input::<String>::new()
            .with_prompt(request.message())
            .allow_empty(true);
        if let Some(current) = &request.current_name {
            input = input.with_initial_text(current.clone());
        }
        input.interact_text().ok()
    }
}

/// Prints notifications to stderr
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("! {}", message);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ExplorerConfig::load(&cli.config)?;
    if let Some(seed) = &cli.seed {
        config = config.with_seed_file(seed)?;
    }

    let env = env_logger::Env::default().default_filter_or(&config.log_filter);
    env_logger::Builder::from_env(env).init();

    let mut explorer = Explorer::new(&config).context("Failed to build the initial tree")?;
    info!("Explorer ready with {} nodes", explorer.tree().node_count());

    println!("{}", explorer.render_outline());
    println!("type 'help' for commands");

    loop {
        let line = match dialoguer::Input::<String>::new()
            .with_prompt("explorer")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(e) => {
                debug!("Input closed: {}", e);
                break;
            }
        };

        if !run_command(&mut explorer, line.trim()) {
            break;
        }
    }

    Ok(())
}

/// Execute one shell command; returns false when the shell should exit
fn run_command(explorer: &mut Explorer, line: &str) -> bool {
    let mut notifier = TerminalNotifier;
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return true;
    };
    let argument = parts.next();

    match command {
        "ls" | "tree" => println!("{}", explorer.render_outline()),
        "toggle" | "select" => {
            let Some(id) = parse_id(argument) else {
                notifier.notify(&format!("usage: {} <id>", command));
                return true;
            };
            let result = if command == "toggle" {
                explorer.toggle(id).map(|_| ())
            } else {
                explorer.select(id)
            };
            match result {
                Ok(()) => println!("{}", explorer.render_outline()),
                Err(e) => notifier.notify(&e.to_string()),
            }
        }
        "new-file" | "new-folder" => {
            let kind = if command == "new-file" {
                NodeKind::File
            } else {
                NodeKind::Folder
            };
            if explorer
                .add_item(kind, &mut TerminalPrompt, &mut notifier)
                .is_ok()
            {
                println!("{}", explorer.render_outline());
            }
        }
        "rename" => {
            if explorer
                .rename_selected(&mut TerminalPrompt, &mut notifier)
                .is_ok()
            {
                println!("{}", explorer.render_outline());
            }
        }
        "delete" => {
            if let Ok(removed) = explorer.delete_selected(&mut notifier) {
                println!("deleted {} ({} items)", removed.name(), removed.subtree_size());
                println!("{}", explorer.render_outline());
            }
        }
        "preview" => match explorer.preview() {
            Some(preview) => print_preview(&preview),
            None => println!("nothing to preview"),
        },
        "help" => println!("{}", HELP),
        "quit" | "exit" => return false,
        other => notifier.notify(&format!("unknown command '{}', try 'help'", other)),
    }

    true
}

/// Accepts both `7` and `#7`
fn parse_id(argument: Option<&str>) -> Option<NodeId> {
    let raw = argument?;
    raw.trim_start_matches('#').parse::<u64>().ok().map(NodeId::from)
}

fn print_preview(preview: &Preview) {
    println!("== {} ({}) ==", preview.name, preview.content_type);
    match preview.content_type {
        ContentType::Image => println!("[image: {}]", preview.placeholder_label()),
        ContentType::Text => println!("{}", preview.placeholder_text()),
    }
}
