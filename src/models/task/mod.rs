//! Task model.
//!
//! An actionable item under a goal. Dropping a task onto the calendar
//! spawns a new event; the task itself is never modified or consumed by
//! that conversion.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A task belonging to a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Identifier of the owning goal.
    pub goal_id: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Local>>,
}

impl Task {
    /// Create a new task under the given goal.
    pub fn new(name: impl Into<String>, goal_id: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            goal_id: goal_id.into(),
            completed: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Validate the task data.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Task name cannot be empty".to_string());
        }
        Ok(())
    }
}
