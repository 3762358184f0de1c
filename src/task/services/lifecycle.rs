//! Service layer for task creation, revision, and retrieval.
//!
//! Title validation lives here so no code path reaches the store with a
//! blank title. Owner confirmation does NOT live here: it belongs to the
//! endpoint orchestration, which resolves the owner before delegating.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::domain::UserId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task for an already-confirmed owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is blank and
    /// [`TaskLifecycleError::Repository`] when persistence fails. Nothing
    /// is written on either failure.
    pub async fn create(
        &self,
        title: String,
        done: bool,
        owner: UserId,
    ) -> TaskLifecycleResult<Task> {
        let validated = TaskTitle::new(title)?;
        let draft = TaskDraft::new(validated, done, owner, &*self.clock);
        Ok(self.repository.insert(&draft).await?)
    }

    /// Returns all tasks in store iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Returns all tasks owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list_by_owner(&self, owner: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_by_owner(owner).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Replaces the title and completion flag of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is blank and
    /// [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn update(&self, id: TaskId, title: String, done: bool) -> TaskLifecycleResult<Task> {
        let validated = TaskTitle::new(title)?;
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.revise(validated, done, &*self.clock);
        Ok(self.repository.update(&task).await?)
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist;
    /// deleting the same identifier twice fails both times.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
