//! Materialization of tasks into calendar events.
//!
//! Dropping a task onto the week grid spawns a new event draft carrying
//! the task's name and the owning goal's color. The source task is a
//! read-only input; it is never deleted or marked by the conversion.

use chrono::{DateTime, Local, NaiveDate};
use thiserror::Error;

use crate::models::category::Category;
use crate::models::event::EventDraft;
use crate::services::slot::{PointerFraction, Slot};
use crate::utils::date::wall_clock;

/// Drag payload captured when a task drag starts: the task reference
/// plus the owning goal's display color.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDrop {
    pub task_id: String,
    pub task_name: String,
    pub goal_color: String,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    #[error("task name cannot be empty")]
    EmptyTaskName,
    #[error("malformed time of day: {0:?}")]
    MalformedTime(String),
}

/// "HH:MM" start and end times for a task dropped at the given slot
/// position: start at the pointer minute, end one hour later at the
/// same minute. A drop in the 23:00 row yields an end hour of 24,
/// which rolls into the next day.
pub fn slot_times(slot: &Slot, fraction: PointerFraction) -> (String, String) {
    let minute = fraction.minute();
    (
        format!("{:02}:{:02}", slot.hour(), minute),
        format!("{:02}:{:02}", slot.hour() + 1, minute),
    )
}

/// Build the event draft for a task dropped onto `date` between the
/// given "HH:MM" times.
///
/// Tasks carry no category, so the draft takes the default one; the
/// goal color is set as an explicit override and therefore always wins
/// over the category color.
pub fn materialize_task(
    drop: &TaskDrop,
    date: NaiveDate,
    start_time: &str,
    end_time: &str,
) -> Result<EventDraft, ConversionError> {
    if drop.task_name.trim().is_empty() {
        return Err(ConversionError::EmptyTaskName);
    }

    let start = at_time_of_day(date, start_time)?;
    let end = at_time_of_day(date, end_time)?;

    Ok(EventDraft {
        title: drop.task_name.clone(),
        category: Category::default(),
        start,
        end,
        color: Some(drop.goal_color.clone()),
        location: None,
        description: None,
    })
}

fn at_time_of_day(date: NaiveDate, time: &str) -> Result<DateTime<Local>, ConversionError> {
    let (hour, minute) = time
        .split_once(':')
        .and_then(|(h, m)| Some((h.parse::<u32>().ok()?, m.parse::<u32>().ok()?)))
        .filter(|&(h, m)| h <= 24 && m < 60)
        .ok_or_else(|| ConversionError::MalformedTime(time.to_string()))?;

    wall_clock(date, hour, minute).ok_or_else(|| ConversionError::MalformedTime(time.to_string()))
}
