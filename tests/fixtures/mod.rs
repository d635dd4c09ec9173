// Test fixtures - reusable test data
// Provides consistent test data and an in-memory document store double

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use std::sync::Mutex;

use week_planner::models::event::{Event, EventDraft};
use week_planner::models::goal::Goal;
use week_planner::models::task::Task;
use week_planner::services::api::{ApiError, NewGoal, NewTask, PlannerApi};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Monday, Feb 5 2024
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()
    }

    /// Returns Feb 5 2024 at the given wall-clock time
    pub fn monday_at(hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 2, 5, hour, minute, 0)
            .unwrap()
    }
}

/// Sample drafts and events for testing
pub mod events {
    use super::*;
    use week_planner::models::category::Category;

    /// A one-hour work draft starting Monday 10:00
    pub fn report_draft() -> EventDraft {
        EventDraft {
            title: "Write report".to_string(),
            category: Category::Work,
            start: dates::monday_at(10, 0),
            end: dates::monday_at(11, 0),
            color: Some("#3B82F6".to_string()),
            location: None,
            description: None,
        }
    }

    /// A half-hour standup starting Monday 9:00
    pub fn standup() -> Event {
        Event::new(
            "Standup",
            dates::monday_at(9, 0),
            dates::monday_at(9, 0) + Duration::minutes(30),
        )
        .unwrap()
    }
}

/// In-memory document store. Persists events, goals, and tasks behind
/// the same seam as the HTTP client, assigns sequential opaque ids, and
/// joins tasks onto their goals when listing, like the real
/// collaborator does. Flip `fail` to make every call answer as a 500.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    events: Vec<Event>,
    goals: Vec<Goal>,
    tasks: Vec<Task>,
    next_id: u32,
    fail: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail(&self, fail: bool) {
        self.inner.lock().unwrap().fail = fail;
    }

    fn error() -> ApiError {
        ApiError::Status {
            operation: "in-memory store",
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[async_trait]
impl PlannerApi for InMemoryStore {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail {
            return Err(Self::error());
        }
        Ok(inner.events.clone())
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<Event, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail {
            return Err(Self::error());
        }
        inner.next_id += 1;
        let event = Event {
            id: Some(format!("e{}", inner.next_id)),
            title: draft.title.clone(),
            category: draft.category,
            start: draft.start,
            end: draft.end,
            color: draft.color.clone(),
            location: draft.location.clone(),
            description: draft.description.clone(),
            created_at: Some(Local::now()),
            updated_at: Some(Local::now()),
        };
        inner.events.push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: &str, event: &Event) -> Result<Event, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail {
            return Err(Self::error());
        }
        let mut echoed = event.clone();
        echoed.id = Some(id.to_string());
        echoed.updated_at = Some(Local::now());
        match inner.events.iter_mut().find(|e| e.id.as_deref() == Some(id)) {
            Some(stored) => {
                *stored = echoed.clone();
                Ok(echoed)
            }
            None => Err(Self::error()),
        }
    }

    async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail {
            return Err(Self::error());
        }
        inner.events.retain(|e| e.id.as_deref() != Some(id));
        Ok(())
    }

    async fn list_goals(&self) -> Result<Vec<Goal>, ApiError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail {
            return Err(Self::error());
        }
        let goals = inner
            .goals
            .iter()
            .map(|goal| {
                let mut joined = goal.clone();
                joined.tasks = inner
                    .tasks
                    .iter()
                    .filter(|t| Some(t.goal_id.as_str()) == goal.id.as_deref())
                    .cloned()
                    .collect();
                joined
            })
            .collect();
        Ok(goals)
    }

    async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail {
            return Err(Self::error());
        }
        inner.next_id += 1;
        let goal = Goal {
            id: Some(format!("g{}", inner.next_id)),
            name: goal.name.clone(),
            color: goal.color.clone(),
            tasks: Vec::new(),
            created_at: Some(Local::now()),
            updated_at: Some(Local::now()),
        };
        inner.goals.push(goal.clone());
        Ok(goal)
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail {
            return Err(Self::error());
        }
        if !inner
            .goals
            .iter()
            .any(|g| g.id.as_deref() == Some(task.goal_id.as_str()))
        {
            return Err(Self::error());
        }
        inner.next_id += 1;
        let task = Task {
            id: Some(format!("t{}", inner.next_id)),
            name: task.name.clone(),
            goal_id: task.goal_id.clone(),
            completed: false,
            created_at: Some(Local::now()),
            updated_at: Some(Local::now()),
        };
        inner.tasks.push(task.clone());
        Ok(task)
    }
}
