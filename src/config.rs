//! Card configuration loading and validation.

use crate::error::{CardError, CardResult};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Card configuration as declared in the dashboard.
///
/// ```yaml
/// type: custom:todoist-project-card
/// entity: sensor.todoist_tasks
/// show_completed: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardConfig {
    /// Entity id of the sensor carrying the task attributes.
    pub entity: String,

    /// Render completed tasks (struck through) instead of hiding them.
    pub show_completed: bool,
}

impl CardConfig {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            show_completed: false,
        }
    }

    pub fn with_show_completed(mut self, show_completed: bool) -> Self {
        self.show_completed = show_completed;
        self
    }

    /// Validate a host-supplied configuration object.
    ///
    /// Unrecognized keys (including the dashboard's own `type`) are ignored.
    pub fn from_value(value: &Value) -> CardResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| CardError::invalid_value("config", "card configuration must be a mapping"))?;

        let entity = match obj.get("entity") {
            None | Some(Value::Null) => return Err(CardError::missing_field("entity")),
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err(CardError::missing_field("entity"));
            }
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(CardError::invalid_value("entity", "entity must be a string")),
        };

        let show_completed = match obj.get("show_completed") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                return Err(CardError::invalid_value(
                    "show_completed",
                    "show_completed must be a boolean",
                ));
            }
        };

        Ok(Self {
            entity,
            show_completed,
        })
    }

    /// Load a card configuration from a YAML (or JSON) file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read card config {}", path.display()))?;
        let value: Value = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse card config {}", path.display()))?;
        Ok(Self::from_value(&value)?)
    }
}
