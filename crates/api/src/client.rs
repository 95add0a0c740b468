//! Task service client implementation.
//!
//! This module provides the [`TaskApi`] struct wrapping the REST task
//! collection endpoint. The service is an opaque collaborator: the client
//! issues conventional resource calls and reports any rejection uniformly
//! as a failure. Timeouts are left to the transport's defaults.

use reqwest::Response;
use tracing::{debug, instrument};

use taskdeck_protocol::{Task, TaskDraft};

use crate::error::{Error, Result};

/// Client for the task collection endpoint.
///
/// Wraps a [`reqwest::Client`] (which pools connections internally, so the
/// struct is cheap to clone) and a base URL such as
/// `http://localhost:3000`.
///
/// # Examples
///
/// ```no_run
/// use taskdeck_api::TaskApi;
///
/// # async fn example() -> taskdeck_api::Result<()> {
/// let api = TaskApi::new("http://localhost:3000");
/// let tasks = api.list().await?;
/// println!("loaded {} tasks", tasks.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TaskApi {
    http: reqwest::Client,
    base_url: String,
}

impl TaskApi {
    /// Creates a new client for the given base URL.
    ///
    /// A trailing slash on the base URL is accepted and normalized away.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Returns the base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn resource_url(&self, id: &str) -> String {
        format!("{}/tasks/{id}", self.base_url)
    }

    /// Fetches the full task list (`GET /tasks`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service rejects it, or
    /// the response body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Task>> {
        let url = self.collection_url();
        let response = self.http.get(&url).send().await?;
        let response = check_status(response)?;
        let tasks: Vec<Task> = response.json().await.map_err(Error::Decode)?;
        debug!(count = tasks.len(), "fetched task list");
        Ok(tasks)
    }

    /// Creates a task (`POST /tasks`) and returns the server's record,
    /// including the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service rejects it, or
    /// the response body cannot be decoded.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: &TaskDraft) -> Result<Task> {
        let url = self.collection_url();
        let response = self.http.post(&url).json(draft).send().await?;
        let response = check_status(response)?;
        let task: Task = response.json().await.map_err(Error::Decode)?;
        debug!(id = %task.id, "created task");
        Ok(task)
    }

    /// Replaces a task (`PUT /tasks/{id}`) and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service rejects it, or
    /// the response body cannot be decoded.
    #[instrument(skip(self, draft), fields(id = %id))]
    pub async fn update(&self, id: &str, draft: &TaskDraft) -> Result<Task> {
        let url = self.resource_url(id);
        let response = self.http.put(&url).json(draft).send().await?;
        let response = check_status(response)?;
        let task: Task = response.json().await.map_err(Error::Decode)?;
        debug!(id = %task.id, "updated task");
        Ok(task)
    }

    /// Deletes a task (`DELETE /tasks/{id}`). No body is expected.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = self.resource_url(id);
        let response = self.http.delete(&url).send().await?;
        check_status(response)?;
        debug!("deleted task");
        Ok(())
    }
}

/// Maps non-success responses to [`Error::Status`].
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status {
            status,
            url: response.url().to_string(),
        })
    }
}
