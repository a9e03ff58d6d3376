//! CLI command definitions for todoist-project-card
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod render;

use clap::{Parser, Subcommand};
use render::RenderArgs;

/// Render a Todoist project card from a dashboard config and a state dump
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the card markup for a state registry dump
    Render(RenderArgs),

    /// Print the card's registration record as JSON
    Info,
}
