//! Event placement for the week grid.
//!
//! Decides which events occupy a given grid cell and resolves drop
//! gestures, whether of an existing event being repositioned or of a
//! task being materialized into a new event.

use chrono::Timelike;
use thiserror::Error;

use crate::models::event::{Event, EventDraft};
use crate::services::conversion::{materialize_task, slot_times, ConversionError, TaskDrop};
use crate::services::slot::{PointerFraction, Slot, SlotError};

/// Payload carried by an in-progress drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    /// An existing calendar event being repositioned.
    Event(Event),
    /// A sidebar task being dropped onto the grid.
    Task(TaskDrop),
}

/// Outcome of releasing a drag over a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum DropAction {
    /// Create a brand-new event from the materialized draft.
    Create(EventDraft),
    /// Persist the repositioned event.
    Move(Event),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlacementError {
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Whether `event` renders in the given cell.
///
/// An event belongs to cell (day, hour) when it starts on that day and
/// the hour row lies between its start hour (inclusive) and end hour
/// (exclusive). A multi-hour event therefore occupies every intersected
/// row of its start day; the rendered block merges those rows through
/// absolute positioning and height. An event whose end falls on a later
/// calendar day matches no row past its start hour, since its end hour
/// compares on the clock face alone.
pub fn occupies_cell(event: &Event, slot: &Slot) -> bool {
    event.start.date_naive() == slot.date()
        && event.start.hour() <= slot.hour()
        && event.end.hour() > slot.hour()
}

/// Events rendering in the given cell, in cache order.
pub fn events_in_cell<'a>(events: &'a [Event], slot: &Slot) -> Vec<&'a Event> {
    events.iter().filter(|e| occupies_cell(e, slot)).collect()
}

/// Move an existing event so it starts where the pointer dropped it,
/// keeping its original duration exactly. Every other field passes
/// through unchanged, including an explicit color override.
pub fn reposition(
    event: &Event,
    slot: &Slot,
    fraction: PointerFraction,
) -> Result<Event, SlotError> {
    let duration = event.duration();
    let start = slot.start_at(fraction)?;

    let mut moved = event.clone();
    moved.start = start;
    moved.end = start + duration;
    Ok(moved)
}

/// Resolve a drop gesture over `slot`.
///
/// A drop with no active payload is ignored and resolves to `None`.
pub fn resolve_drop(
    payload: Option<&DragPayload>,
    slot: &Slot,
    fraction: PointerFraction,
) -> Result<Option<DropAction>, PlacementError> {
    match payload {
        None => Ok(None),
        Some(DragPayload::Event(event)) => {
            Ok(Some(DropAction::Move(reposition(event, slot, fraction)?)))
        }
        Some(DragPayload::Task(task)) => {
            let (start, end) = slot_times(slot, fraction);
            let draft = materialize_task(task, slot.date(), &start, &end)?;
            Ok(Some(DropAction::Create(draft)))
        }
    }
}
