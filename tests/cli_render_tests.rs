//! Tests for the render command: config and state files on disk through to markup.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use todoist_project_card::cli::render::{RenderArgs, execute, render_markup};
use todoist_project_card::config::CardConfig;

const CARD_YAML: &str = "\
type: custom:todoist-project-card
entity: sensor.todoist_tasks
show_completed: false
";

const STATES_JSON: &str = r#"{
  "sensor.todoist_tasks": {
    "entity_id": "sensor.todoist_tasks",
    "state": "2",
    "attributes": {
      "tasks": [
        {"id": "1", "content": "Pack bags", "order": 1, "section_id": "10"},
        {"id": "2", "content": "Book taxi", "order": 2, "completed": true},
        {"id": "3", "content": "Passport", "order": 1, "parent_id": "1"}
      ],
      "sections": {
        "10": {"id": "10", "name": "Trip", "order": 1}
      }
    }
  }
}"#;

/// Helper to write the fixture files into a temp dir.
fn write_fixtures(dir: &Path, card: &str, states: &str) -> RenderArgs {
    let card_path = dir.join("card.yaml");
    let states_path = dir.join("states.json");
    fs::write(&card_path, card).unwrap();
    fs::write(&states_path, states).unwrap();
    RenderArgs {
        card: card_path,
        states: states_path,
        output: None,
        show_completed: false,
    }
}

#[test]
fn load_card_config_from_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("card.yaml");
    fs::write(&path, CARD_YAML).unwrap();

    let config = CardConfig::load(&path).unwrap();
    assert_eq!(config, CardConfig::new("sensor.todoist_tasks"));
}

#[test]
fn load_card_config_without_entity_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("card.yaml");
    fs::write(&path, "type: custom:todoist-project-card\nshow_completed: true\n").unwrap();

    let err = CardConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("entity is required"));
}

#[test]
fn render_markup_from_files() {
    let dir = TempDir::new().unwrap();
    let args = write_fixtures(dir.path(), CARD_YAML, STATES_JSON);

    let html = render_markup(&args).unwrap();
    assert!(html.contains(r#"<div class="section-title">Trip<hr class="separator"></div>"#));
    assert!(html.contains("Pack bags"));
    assert!(html.contains("Passport"));
    assert!(!html.contains("Book taxi"));
}

#[test]
fn show_completed_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let mut args = write_fixtures(dir.path(), CARD_YAML, STATES_JSON);
    args.show_completed = true;

    let html = render_markup(&args).unwrap();
    assert!(html.contains("Book taxi"));
}

#[test]
fn execute_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let mut args = write_fixtures(dir.path(), CARD_YAML, STATES_JSON);
    let out = dir.path().join("card.html");
    args.output = Some(out.clone());

    execute(&args).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, render_markup(&args).unwrap());
}

#[test]
fn unknown_entity_renders_placeholder() {
    let dir = TempDir::new().unwrap();
    let args = write_fixtures(dir.path(), "entity: sensor.missing\n", STATES_JSON);

    let html = render_markup(&args).unwrap();
    assert!(html.contains("Entity sensor.missing not found"));
}

#[test]
fn malformed_states_file_fails() {
    let dir = TempDir::new().unwrap();
    let args = write_fixtures(dir.path(), CARD_YAML, "[1, 2, 3]");

    assert!(render_markup(&args).is_err());
}
