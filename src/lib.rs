//! Todoist Project Card Library
//!
//! Renders a Todoist project published by a sensor entity (sections, tasks and
//! subtasks) as a read-only dashboard card.

pub mod card;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod sections;
pub mod state;
pub mod tree;
pub mod types;
