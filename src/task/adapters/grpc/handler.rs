//! gRPC handler for the task endpoint, including owner-checked creation.
//!
//! `CreateTask` is the orchestration core: the owning user is resolved
//! through the injected [`UserResolver`] before the service is asked to
//! persist anything. The policy is fail-closed: if the owner cannot be
//! positively confirmed (missing, service down, timeout), the task is not
//! created. Owner confirmation is never cached; every creation resolves
//! afresh.

use crate::proto::task_v1 as wire;
use crate::proto::task_v1::task_service_server::TaskService;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, UserLookupError, UserResolver},
    services::{TaskLifecycleError, TaskLifecycleService},
};
use crate::user::domain::UserId;
use mockable::Clock;
use std::sync::Arc;
use tonic::{Request, Response, Status};

/// gRPC endpoint for task management.
#[derive(Clone)]
pub struct GrpcTaskEndpoint<R, C, U>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserResolver,
{
    service: TaskLifecycleService<R, C>,
    resolver: Arc<U>,
}

impl<R, C, U> GrpcTaskEndpoint<R, C, U>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    U: UserResolver,
{
    /// Creates an endpoint over the given service and owner resolver.
    #[must_use]
    pub const fn new(service: TaskLifecycleService<R, C>, resolver: Arc<U>) -> Self {
        Self { service, resolver }
    }
}

#[tonic::async_trait]
impl<R, C, U> TaskService for GrpcTaskEndpoint<R, C, U>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
    U: UserResolver + 'static,
{
    async fn create_task(
        &self,
        request: Request<wire::CreateTaskRequest>,
    ) -> Result<Response<wire::TaskResponse>, Status> {
        let req = request.into_inner();
        let owner = parse_owner_id(req.user_id)?;

        // Owner resolution happens-before persistence, unconditionally.
        self.resolver
            .resolve(owner)
            .await
            .map_err(|err| owner_resolution_status(owner, &err))?;

        let task = self
            .service
            .create(req.title, req.is_done, owner)
            .await
            .map_err(lifecycle_status)?;
        Ok(Response::new(wire::TaskResponse {
            task: Some(to_wire(&task)),
        }))
    }

    async fn get_task_list(
        &self,
        _request: Request<wire::GetTaskListRequest>,
    ) -> Result<Response<wire::TaskListResponse>, Status> {
        let tasks = self.service.list().await.map_err(lifecycle_status)?;
        Ok(Response::new(wire::TaskListResponse {
            tasks: tasks.iter().map(to_wire).collect(),
        }))
    }

    async fn update_task(
        &self,
        request: Request<wire::UpdateTaskRequest>,
    ) -> Result<Response<wire::TaskResponse>, Status> {
        let req = request.into_inner();
        let id = parse_task_id(req.id)?;
        let task = self
            .service
            .update(id, req.title, req.is_done)
            .await
            .map_err(lifecycle_status)?;
        Ok(Response::new(wire::TaskResponse {
            task: Some(to_wire(&task)),
        }))
    }

    async fn delete_task(
        &self,
        request: Request<wire::DeleteTaskRequest>,
    ) -> Result<Response<wire::DeleteTaskResponse>, Status> {
        let id = parse_task_id(request.into_inner().id)?;
        self.service.delete(id).await.map_err(lifecycle_status)?;
        Ok(Response::new(wire::DeleteTaskResponse {}))
    }

    async fn list_tasks_by_user(
        &self,
        request: Request<wire::ListTasksByUserRequest>,
    ) -> Result<Response<wire::TaskListResponse>, Status> {
        let owner = parse_owner_id(request.into_inner().user_id)?;
        let tasks = self
            .service
            .list_by_owner(owner)
            .await
            .map_err(lifecycle_status)?;
        Ok(Response::new(wire::TaskListResponse {
            tasks: tasks.iter().map(to_wire).collect(),
        }))
    }
}

/// Maps a wire user id to the domain type, rejecting zero.
fn parse_owner_id(raw: u32) -> Result<UserId, Status> {
    UserId::new(raw).map_err(|_| Status::invalid_argument("user id must be > 0"))
}

/// Maps a wire task id to the domain type, rejecting zero.
fn parse_task_id(raw: u32) -> Result<TaskId, Status> {
    TaskId::new(raw).map_err(|_| Status::invalid_argument("task id must be > 0"))
}

/// Status mapping for the fail-closed owner check.
fn owner_resolution_status(owner: UserId, err: &UserLookupError) -> Status {
    match err {
        UserLookupError::NotFound(_) => {
            Status::not_found(format!("user with id {owner} not found"))
        }
        UserLookupError::Unavailable(_) | UserLookupError::Lookup(_) => {
            tracing::warn!(user_id = owner.value(), error = %err, "owner resolution failed");
            Status::internal(format!("failed to resolve task owner: {err}"))
        }
    }
}

fn lifecycle_status(err: TaskLifecycleError) -> Status {
    match err {
        TaskLifecycleError::Domain(domain) => Status::invalid_argument(domain.to_string()),
        TaskLifecycleError::Repository(TaskRepositoryError::NotFound(_)) => {
            Status::not_found("task not found")
        }
        TaskLifecycleError::Repository(TaskRepositoryError::Persistence(err)) => {
            tracing::warn!(error = %err, "task store failure");
            Status::internal("task store failure")
        }
    }
}

fn to_wire(task: &Task) -> wire::Task {
    wire::Task {
        id: task.id().value(),
        title: task.title().as_str().to_owned(),
        is_done: task.done(),
        user_id: task.owner().value(),
    }
}
