//! Client state store.
//!
//! The single process-wide cache of events and goals, kept in sync with
//! the document store through [`PlannerApi`]. Commands never update the
//! cache speculatively: a mutation lands in the cache only after the
//! collaborator has confirmed it, so a failure leaves the previous
//! state fully intact and the UI shows stale data rather than data that
//! might need rolling back.
//!
//! Commands take `&mut self`, so two commands for the same store can
//! never be in flight at once; interleaving only happens between whole
//! commands, never inside one.

use thiserror::Error;

use crate::models::event::{Event, EventDraft};
use crate::models::goal::Goal;
use crate::services::api::{ApiError, NewGoal, NewTask, PlannerApi};

/// Lifecycle of a fetch for one cache slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Errors surfaced by store commands.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected locally before any network call.
    #[error("{0}")]
    Validation(String),
    #[error("event has not been persisted yet and cannot be {0}")]
    MissingEventId(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// One cache slice plus its fetch lifecycle and last error message.
#[derive(Debug)]
struct Slice<T> {
    items: Vec<T>,
    state: FetchState,
    error: Option<String>,
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            state: FetchState::default(),
            error: None,
        }
    }
}

impl<T> Slice<T> {
    fn begin_fetch(&mut self) {
        self.state = FetchState::Loading;
        self.error = None;
    }

    fn complete_fetch(&mut self, items: Vec<T>) {
        self.items = items;
        self.state = FetchState::Succeeded;
        self.error = None;
    }

    /// Records a fetch failure. The previous items are kept.
    fn fail_fetch(&mut self, error: &ApiError) {
        self.state = FetchState::Failed;
        self.error = Some(error.to_string());
    }
}

/// Process-wide cache of goals and events synchronized against the
/// document store.
pub struct StateStore<C> {
    api: C,
    events: Slice<Event>,
    goals: Slice<Goal>,
}

impl<C: PlannerApi> StateStore<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            events: Slice::default(),
            goals: Slice::default(),
        }
    }

    /// The collaborator client this store issues its calls against.
    pub fn api(&self) -> &C {
        &self.api
    }

    pub fn events(&self) -> &[Event] {
        &self.events.items
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals.items
    }

    pub fn events_state(&self) -> FetchState {
        self.events.state
    }

    pub fn goals_state(&self) -> FetchState {
        self.goals.state
    }

    /// Message from the last failed events command, if any.
    pub fn events_error(&self) -> Option<&str> {
        self.events.error.as_deref()
    }

    pub fn goals_error(&self) -> Option<&str> {
        self.goals.error.as_deref()
    }

    /// Replace the events cache wholesale from the document store.
    pub async fn fetch_events(&mut self) -> Result<(), StoreError> {
        self.events.begin_fetch();
        match self.api.list_events().await {
            Ok(events) => {
                log::info!("Fetched {} events", events.len());
                self.events.complete_fetch(events);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to fetch events: {err}");
                self.events.fail_fetch(&err);
                Err(err.into())
            }
        }
    }

    /// Replace the goals cache wholesale. Goals arrive with their tasks
    /// already joined and nested by the collaborator.
    pub async fn fetch_goals(&mut self) -> Result<(), StoreError> {
        self.goals.begin_fetch();
        match self.api.list_goals().await {
            Ok(goals) => {
                log::info!("Fetched {} goals", goals.len());
                self.goals.complete_fetch(goals);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to fetch goals: {err}");
                self.goals.fail_fetch(&err);
                Err(err.into())
            }
        }
    }

    /// Create an event from a draft and append the confirmed record to
    /// the cache.
    pub async fn create_event(&mut self, draft: EventDraft) -> Result<(), StoreError> {
        draft.validate().map_err(StoreError::Validation)?;

        match self.api.create_event(&draft).await {
            Ok(created) => {
                log::info!("Created event {:?}", created.id);
                self.events.items.push(created);
                self.events.error = None;
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to create event: {err}");
                self.events.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Persist an updated event and replace the cached record with the
    /// echo from the collaborator. Cache order is unchanged.
    pub async fn update_event(&mut self, event: Event) -> Result<(), StoreError> {
        event.validate().map_err(StoreError::Validation)?;
        let id = event
            .id
            .clone()
            .ok_or(StoreError::MissingEventId("updated"))?;

        match self.api.update_event(&id, &event).await {
            Ok(echoed) => {
                match self.events.items.iter_mut().find(|e| e.id.as_deref() == Some(id.as_str())) {
                    Some(cached) => *cached = echoed,
                    None => log::warn!("Updated event {id} is not in the cache"),
                }
                self.events.error = None;
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to update event {id}: {err}");
                self.events.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Delete an event by id, removing exactly the matching record and
    /// leaving the rest of the cache in order.
    pub async fn delete_event(&mut self, id: &str) -> Result<(), StoreError> {
        match self.api.delete_event(id).await {
            Ok(()) => {
                self.events.items.retain(|e| e.id.as_deref() != Some(id));
                self.events.error = None;
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to delete event {id}: {err}");
                self.events.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Create a goal and append the confirmed record to the cache.
    pub async fn create_goal(&mut self, name: &str, color: &str) -> Result<(), StoreError> {
        Goal::new(name, color)
            .validate()
            .map_err(|e| StoreError::Validation(e.to_string()))?;

        let new_goal = NewGoal {
            name: name.to_string(),
            color: color.to_string(),
        };

        match self.api.create_goal(&new_goal).await {
            Ok(created) => {
                log::info!("Created goal {:?}", created.id);
                self.goals.items.push(created);
                self.goals.error = None;
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to create goal: {err}");
                self.goals.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Create a task under an existing goal and append the confirmed
    /// record to that goal's nested task list.
    pub async fn create_task(&mut self, name: &str, goal_id: &str) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation(
                "Task name cannot be empty".to_string(),
            ));
        }
        if !self
            .goals
            .items
            .iter()
            .any(|g| g.id.as_deref() == Some(goal_id))
        {
            return Err(StoreError::Validation(format!(
                "No goal with id {goal_id}"
            )));
        }

        let new_task = NewTask {
            name: name.to_string(),
            goal_id: goal_id.to_string(),
        };

        match self.api.create_task(&new_task).await {
            Ok(created) => {
                log::info!("Created task {:?} under goal {goal_id}", created.id);
                if let Some(goal) = self
                    .goals
                    .items
                    .iter_mut()
                    .find(|g| g.id.as_deref() == Some(goal_id))
                {
                    goal.tasks.push(created);
                }
                self.goals.error = None;
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to create task under goal {goal_id}: {err}");
                self.goals.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}
