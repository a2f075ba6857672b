//! Service layer for task creation, mutation, queries, and statistics.

use crate::task::{
    domain::{
        Task, TaskDescription, TaskDomainError, TaskDraft, TaskFilter, TaskId, TaskPatch,
        TaskPriority, TaskStats, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task from caller-supplied fields.
///
/// Only the title is required; the remaining fields default per the task
/// record contract (status `Pending`, priority `Medium`, no description,
/// no due date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Owns no state of its own: every operation is a read or a
/// get-mutate-put sequence against the injected repository, stamped with
/// the injected clock.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title or description
    /// fails validation, or [`TaskServiceError::Repository`] when the
    /// repository rejects the insert.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let mut draft = TaskDraft::new(title);
        if let Some(description) = request.description {
            draft = draft.with_description(TaskDescription::new(description)?);
        }
        if let Some(status) = request.status {
            draft = draft.with_status(status);
        }
        if let Some(priority) = request.priority {
            draft = draft.with_priority(priority);
        }
        if let Some(due_date) = request.due_date {
            draft = draft.with_due_date(due_date);
        }

        let task = Task::new(draft, &*self.clock);
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the identifier has no
    /// matching record.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        let found = self.repository.find_by_id(id).await?;
        found.ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    /// Lists tasks, optionally filtered and sorted.
    ///
    /// Without a filter the repository snapshot is returned as stored;
    /// with one, the query engine evaluates it against the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot cannot be
    /// read.
    pub async fn list(&self, filter: Option<&TaskFilter>) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.list().await?;
        match filter {
            Some(query) => {
                let now = self.clock.utc();
                Ok(query.apply(tasks, now))
            }
            None => Ok(tasks),
        }
    }

    /// Applies a merge patch to an existing task.
    ///
    /// The patch only overlays supplied fields; the completion timestamp
    /// follows the transition rule on [`Task::apply_patch`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the identifier has no
    /// matching record; the store is left unchanged.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let mut task = self.get(id).await?;
        task.apply_patch(patch, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task irrevocably.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the identifier has no
    /// matching record.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Returns all tasks with the given status, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot cannot be
    /// read.
    pub async fn find_by_status(&self, status: TaskStatus) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.list().await?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.status() == status)
            .collect())
    }

    /// Returns all tasks with the given priority, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot cannot be
    /// read.
    pub async fn find_by_priority(&self, priority: TaskPriority) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.list().await?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.priority() == priority)
            .collect())
    }

    /// Returns all overdue tasks, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot cannot be
    /// read.
    pub async fn find_overdue(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.list().await?;
        let now = self.clock.utc();
        Ok(tasks
            .into_iter()
            .filter(|task| task.is_overdue_at(now))
            .collect())
    }

    /// Computes statistics over the current store contents.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot cannot be
    /// read.
    pub async fn stats(&self) -> TaskServiceResult<TaskStats> {
        let tasks = self.repository.list().await?;
        Ok(TaskStats::from_tasks(&tasks))
    }

    /// Marks a task completed, refreshing its completion timestamp even
    /// when it is already completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the identifier has no
    /// matching record.
    pub async fn mark_completed(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.get(id).await?;
        task.complete(&*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Moves a task to [`TaskStatus::InProgress`].
    ///
    /// A completion timestamp from an earlier completion is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the identifier has no
    /// matching record.
    pub async fn mark_in_progress(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.update(id, TaskPatch::new().with_status(TaskStatus::InProgress))
            .await
    }

    /// Moves a task back to [`TaskStatus::Pending`].
    ///
    /// A completion timestamp from an earlier completion is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the identifier has no
    /// matching record.
    pub async fn mark_pending(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.update(id, TaskPatch::new().with_status(TaskStatus::Pending))
            .await
    }
}
