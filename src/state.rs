//! Host state registry and the typed ingestion boundary.
//!
//! The host hands over its whole state registry on every change. Only the
//! configured entity is parsed, and it is parsed once here so the renderer
//! works on typed records instead of raw JSON.

use crate::error::{CardError, CardResult};
use crate::types::de::truthy;
use crate::types::{ProjectSnapshot, Section, Task};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Key under which the sensor publishes its task list.
pub const ATTR_TASKS: &str = "tasks";

/// Key under which the sensor publishes its section mapping.
pub const ATTR_SECTIONS: &str = "sections";

/// The host's state registry: entity id to raw entity state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateRegistry {
    states: Map<String, Value>,
}

impl StateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a JSON object keyed by entity id.
    pub fn from_value(value: Value) -> CardResult<Self> {
        match value {
            Value::Object(states) => Ok(Self { states }),
            other => Err(CardError::invalid_state(format!(
                "state registry must be an object keyed by entity id, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Load a registry dump from a JSON or YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read state registry {}", path.display()))?;
        let value: Value = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse state registry {}", path.display()))?;
        Ok(Self::from_value(value)?)
    }

    /// Insert or replace one entity state.
    pub fn insert(&mut self, entity_id: impl Into<String>, state: Value) {
        self.states.insert(entity_id.into(), state);
    }

    /// Raw state of an entity, if the host knows it.
    pub fn get(&self, entity_id: &str) -> Option<&Value> {
        self.states.get(entity_id)
    }

    /// Resolve an entity into a typed snapshot.
    ///
    /// `None` means the entity does not exist in the registry.
    pub fn resolve(&self, entity_id: &str) -> Option<ProjectSnapshot> {
        self.get(entity_id).map(ProjectSnapshot::from_entity_state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl ProjectSnapshot {
    /// Read `attributes.tasks` and `attributes.sections` from a raw entity state.
    ///
    /// Missing or malformed attributes yield an empty snapshot.
    pub fn from_entity_state(state: &Value) -> Self {
        let attributes = state.get("attributes");

        let tasks = match attributes.and_then(|a| a.get(ATTR_TASKS)) {
            Some(Value::Array(items)) => items.iter().filter_map(parse_task).collect(),
            _ => Vec::new(),
        };

        let sections = match attributes.and_then(|a| a.get(ATTR_SECTIONS)) {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(key, value)| parse_section(key, value))
                .collect(),
            _ => Vec::new(),
        };

        Self { tasks, sections }
    }
}

fn parse_task(value: &Value) -> Option<Task> {
    if !value.is_object() {
        debug!(kind = json_kind(value), "Skipping task entry that is not an object");
        return None;
    }
    let mut task: Task = match serde_json::from_value(value.clone()) {
        Ok(task) => task,
        Err(e) => {
            debug!(error = %e, "Skipping unreadable task entry");
            return None;
        }
    };
    // Raw REST payloads carry `is_completed` instead of `completed`.
    if value.get("is_completed").is_some_and(truthy) {
        task.completed = true;
    }
    Some(task)
}

fn parse_section(key: &str, value: &Value) -> Option<Section> {
    if !value.is_object() {
        debug!(section = key, "Skipping section entry that is not an object");
        return None;
    }
    let mut section: Section = serde_json::from_value(value.clone()).ok()?;
    if section.id.is_none() {
        section.id = Some(key.to_string());
    }
    Some(section)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
