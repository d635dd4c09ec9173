//! Persistence collaborator: a remote document store spoken to over
//! JSON/HTTP.
//!
//! [`PlannerApi`] is the seam the state store depends on, so tests can
//! substitute an in-memory double; [`HttpPlannerApi`] is the production
//! implementation backed by reqwest.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::event::{Event, EventDraft};
use crate::models::goal::Goal;
use crate::models::task::Task;

/// Errors crossing the collaborator boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {status} to {operation}")]
    Status {
        operation: &'static str,
        status: StatusCode,
    },
}

/// Fields sent when creating a goal.
#[derive(Debug, Clone, Serialize)]
pub struct NewGoal {
    pub name: String,
    pub color: String,
}

/// Fields sent when creating a task under a goal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub name: String,
    pub goal_id: String,
}

/// The document-store operations the planner relies on.
///
/// Identifiers handed back by the store are opaque strings; nothing
/// beyond uniqueness is assumed about their format. The store offers no
/// way to delete goals or tasks.
#[async_trait]
pub trait PlannerApi: Send + Sync {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError>;
    async fn create_event(&self, draft: &EventDraft) -> Result<Event, ApiError>;
    async fn update_event(&self, id: &str, event: &Event) -> Result<Event, ApiError>;
    async fn delete_event(&self, id: &str) -> Result<(), ApiError>;
    /// Goals come back with their tasks already joined and nested.
    async fn list_goals(&self) -> Result<Vec<Goal>, ApiError>;
    async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, ApiError>;
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;
}

/// HTTP client for the document store.
pub struct HttpPlannerApi {
    client: Client,
    base_url: String,
}

impl HttpPlannerApi {
    /// Build a client against the given API base URL (for example
    /// `http://localhost:3000/api`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn check_status(operation: &'static str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { operation, status })
    }
}

#[async_trait]
impl PlannerApi for HttpPlannerApi {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let response = self.client.get(self.url("events")).send().await?;
        Ok(check_status("list events", response)?.json().await?)
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<Event, ApiError> {
        let response = self
            .client
            .post(self.url("events"))
            .json(draft)
            .send()
            .await?;
        Ok(check_status("create event", response)?.json().await?)
    }

    async fn update_event(&self, id: &str, event: &Event) -> Result<Event, ApiError> {
        // The identifier travels in the path; the body carries the
        // event's fields only.
        let mut body = event.clone();
        body.id = None;

        let response = self
            .client
            .put(self.url(&format!("events/{id}")))
            .json(&body)
            .send()
            .await?;
        Ok(check_status("update event", response)?.json().await?)
    }

    async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("events/{id}")))
            .send()
            .await?;
        check_status("delete event", response)?;
        Ok(())
    }

    async fn list_goals(&self) -> Result<Vec<Goal>, ApiError> {
        let response = self.client.get(self.url("goals")).send().await?;
        Ok(check_status("list goals", response)?.json().await?)
    }

    async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, ApiError> {
        let response = self
            .client
            .post(self.url("goals"))
            .json(goal)
            .send()
            .await?;
        Ok(check_status("create goal", response)?.json().await?)
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let response = self
            .client
            .post(self.url("tasks"))
            .json(task)
            .send()
            .await?;
        Ok(check_status("create task", response)?.json().await?)
    }
}
