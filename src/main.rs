//! Todoist Project Card
//!
//! Command line front end that renders the card markup outside the dashboard.

use anyhow::Result;
use clap::Parser;
use todoist_project_card::card::TaskTreeCard;
use todoist_project_card::cli::{Cli, Command, render};
use todoist_project_card::logging::{LogTarget, init_logging};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogTarget::parse(&cli.log), cli.verbose)?;

    match cli.command {
        Command::Render(args) => {
            debug!(
                card = %args.card.display(),
                states = %args.states.display(),
                "Render requested"
            );
            render::execute(&args)
        }
        Command::Info => {
            let info = TaskTreeCard::card_info();
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(())
        }
    }
}
