//! Goal model for grouping tasks.
//!
//! A goal is a user-defined grouping that owns zero or more tasks and
//! supplies the default color for events materialized from them. Goals
//! are created once and never edited or deleted; only their task list
//! grows.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::category::is_valid_hex_color;
use crate::models::task::Task;

/// A goal with its joined tasks.
///
/// Tasks are persisted independently by the document store and joined
/// onto the goal when listing; the nesting here is a read-side view,
/// not embedded ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Hex color, shown for the goal itself and inherited by events
    /// created from its tasks.
    pub color: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Local>>,
}

impl Goal {
    /// Create a new goal with the given name and color.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
            tasks: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Validate the goal data.
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !is_valid_hex_color(&self.color) {
            return Err(GoalValidationError::InvalidColor);
        }
        Ok(())
    }
}

/// Validation errors for Goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    InvalidColor,
}

impl std::fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::InvalidColor => write!(f, "Invalid color format (use hex like #FF0000)"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
