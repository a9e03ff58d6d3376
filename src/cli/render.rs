//! Render command implementation.
//!
//! Runs the card the way the host would: configuration first, then one state
//! push, and writes the resulting markup.

use crate::card::TaskTreeCard;
use crate::config::CardConfig;
use crate::state::StateRegistry;
use anyhow::{Context, Result, anyhow};
use clap::Args;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the render command.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Card configuration file (YAML or JSON)
    #[arg(short, long)]
    pub card: PathBuf,

    /// State registry dump: entity id -> entity state (JSON or YAML)
    #[arg(short, long)]
    pub states: PathBuf,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show completed tasks regardless of the card configuration
    #[arg(long)]
    pub show_completed: bool,
}

/// Render the card and return its markup.
pub fn render_markup(args: &RenderArgs) -> Result<String> {
    let mut config = CardConfig::load(&args.card)?;
    if args.show_completed {
        config.show_completed = true;
    }
    let states = StateRegistry::load(&args.states)?;

    let mut card = TaskTreeCard::new();
    card.apply_config(config);
    card.set_states(&states);

    if let Some(snapshot) = card.snapshot() {
        info!(
            tasks = snapshot.tasks.len(),
            open = snapshot.open_task_count(),
            sections = snapshot.sections.len(),
            "Rendering project"
        );
    }

    card.markup()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("card produced no markup"))
}

/// Execute the render command.
pub fn execute(args: &RenderArgs) -> Result<()> {
    let html = render_markup(args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Card written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
