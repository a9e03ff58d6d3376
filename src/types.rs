//! Core types for the project card.
//!
//! Task and section records come from the sensor attributes written by the
//! Todoist integration. Every field is read leniently: a malformed value falls
//! back to its default instead of rejecting the whole record.

use serde::Deserialize;

/// Task priority as shown by Todoist (4 = most urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Priority {
    #[default]
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    /// Map a raw priority level; anything outside 1..=4 is the lowest priority.
    pub fn from_level(level: i64) -> Self {
        match level {
            4 => Priority::P4,
            3 => Priority::P3,
            2 => Priority::P2,
            _ => Priority::P1,
        }
    }

    /// CSS class of the bullet marker.
    pub fn css_class(self) -> &'static str {
        match self {
            Priority::P1 => "p1",
            Priority::P2 => "p2",
            Priority::P3 => "p3",
            Priority::P4 => "p4",
        }
    }

    /// Marker border color.
    pub fn color(self) -> &'static str {
        match self {
            Priority::P4 => "#db4c3f",
            Priority::P3 => "#eb8909",
            Priority::P2 => "#246fe0",
            Priority::P1 => "var(--divider-color)",
        }
    }
}

/// Due date of a task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Due {
    /// Human readable form, e.g. "every monday".
    pub string: Option<String>,
    pub date: Option<String>,
    pub datetime: Option<String>,
}

impl Due {
    /// Badge text: the human string, else the date, else the date-time.
    pub fn label(&self) -> &str {
        [&self.string, &self.date, &self.datetime]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }
}

/// A task from the sensor attributes.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "de::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub parent_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub section_id: Option<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub order: f64,
    #[serde(default, deserialize_with = "de::text")]
    pub content: String,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::labels")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "de::due")]
    pub due: Option<Due>,
    #[serde(default, deserialize_with = "de::priority")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "de::flag")]
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            content: content.into(),
            ..Self::default()
        }
    }
}

/// A project section.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "de::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub order: f64,
}

/// Typed view of one sensor entity: its tasks and its section mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectSnapshot {
    /// Tasks in the order the sensor lists them.
    pub tasks: Vec<Task>,
    /// Sections in mapping order; each `id` is set (falling back to the mapping key).
    pub sections: Vec<Section>,
}

impl ProjectSnapshot {
    /// Look up a known section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id.as_deref() == Some(id))
    }

    /// Number of tasks not yet completed.
    pub fn open_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }
}

/// Lenient field deserializers.
///
/// Each reads the raw JSON value and never fails, so one malformed field only
/// costs that field its value.
pub(crate) mod de {
    use super::{Due, Priority};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Text form of a scalar (strings as-is, numbers and booleans printed).
    pub(crate) fn scalar_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// JavaScript-style truthiness, as the upstream sensor data is produced for a JS frontend.
    pub(crate) fn truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub(crate) fn as_number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub(crate) fn opt_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub(crate) fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(as_number(&value).filter(|f| f.is_finite()).unwrap_or(0.0))
    }

    pub(crate) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(scalar_text(&value).unwrap_or_default())
    }

    pub(crate) fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(scalar_text(&value).filter(|s| !s.is_empty()))
    }

    pub(crate) fn labels<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::Array(items) => items
                .iter()
                .map(|item| scalar_text(item).unwrap_or_default())
                .collect(),
            _ => Vec::new(),
        })
    }

    pub(crate) fn due<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Due>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::Object(map) => Some(Due {
                string: map.get("string").and_then(scalar_text),
                date: map.get("date").and_then(scalar_text),
                datetime: map.get("datetime").and_then(scalar_text),
            }),
            Value::String(s) if !s.is_empty() => Some(Due {
                string: Some(s),
                ..Due::default()
            }),
            _ => None,
        })
    }

    pub(crate) fn priority<'de, D: Deserializer<'de>>(d: D) -> Result<Priority, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(as_number(&value)
            .filter(|f| f.fract() == 0.0)
            .map(|f| Priority::from_level(f as i64))
            .unwrap_or_default())
    }

    pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(truthy(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_priority_out_of_range_falls_back_to_lowest() {
        assert_eq!(Priority::from_level(4), Priority::P4);
        assert_eq!(Priority::from_level(0), Priority::P1);
        assert_eq!(Priority::from_level(9), Priority::P1);
        assert_eq!(Priority::from_level(-3).css_class(), "p1");
    }

    #[test]
    fn test_due_label_preference() {
        let due = Due {
            string: Some("tomorrow".into()),
            date: Some("2026-10-20".into()),
            datetime: None,
        };
        assert_eq!(due.label(), "tomorrow");

        let due = Due {
            string: Some(String::new()),
            date: None,
            datetime: Some("2026-10-20T09:00:00Z".into()),
        };
        assert_eq!(due.label(), "2026-10-20T09:00:00Z");
        assert_eq!(Due::default().label(), "");
    }

    #[test]
    fn test_task_defaults() {
        let task: Task = serde_json::from_value(json!({"id": "1"})).unwrap();
        assert_eq!(task.id.as_deref(), Some("1"));
        assert_eq!(task.order, 0.0);
        assert_eq!(task.priority, Priority::P1);
        assert_eq!(task.content, "");
        assert!(task.labels.is_empty());
        assert!(task.due.is_none());
        assert!(!task.completed);
    }

    #[test]
    fn test_task_malformed_fields_are_defaulted() {
        let task: Task = serde_json::from_value(json!({
            "id": 17,
            "parent_id": "",
            "section_id": null,
            "order": "oops",
            "content": "Buy milk",
            "description": "",
            "labels": "errands",
            "due": 12,
            "priority": "urgent",
            "completed": 1
        }))
        .unwrap();
        assert_eq!(task.id.as_deref(), Some("17"));
        assert_eq!(task.parent_id, None);
        assert_eq!(task.section_id, None);
        assert_eq!(task.order, 0.0);
        assert_eq!(task.description, None);
        assert!(task.labels.is_empty());
        assert!(task.due.is_none());
        assert_eq!(task.priority, Priority::P1);
        assert!(task.completed);
    }

    #[test]
    fn test_bare_due_string() {
        let task: Task = serde_json::from_value(json!({"due": "next week"})).unwrap();
        assert_eq!(task.due.unwrap().label(), "next week");
    }
}
