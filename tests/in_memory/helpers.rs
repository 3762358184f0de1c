//! Shared test helpers for in-memory endpoint integration tests.

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tasktrack::proto::{task_v1, user_v1};
use tasktrack::task::{
    adapters::grpc::GrpcTaskEndpoint,
    adapters::memory::InMemoryTaskRepository,
    ports::{ResolvedOwner, UserLookupError, UserLookupResult, UserResolver},
    services::TaskLifecycleService,
};
use tasktrack::user::{
    adapters::grpc::GrpcUserEndpoint, adapters::memory::InMemoryUserRepository,
    services::UserAccountService,
};
use tasktrack::user::domain::UserId;
use tokio::runtime::Runtime;
use tonic::Request;

/// User endpoint over an in-memory store.
pub type TestUserEndpoint = GrpcUserEndpoint<InMemoryUserRepository, DefaultClock>;

/// Task endpoint whose owner checks run against the in-memory user store.
pub type TestTaskEndpoint =
    GrpcTaskEndpoint<InMemoryTaskRepository, DefaultClock, AccountBackedResolver>;

/// Owner resolver backed by the in-process user account service.
///
/// Stands in for the remote user service so the owner-checked creation
/// path can be exercised end to end without a network.
pub struct AccountBackedResolver {
    service: UserAccountService<InMemoryUserRepository, DefaultClock>,
}

#[async_trait]
impl UserResolver for AccountBackedResolver {
    async fn resolve(&self, id: UserId) -> UserLookupResult<ResolvedOwner> {
        match self.service.get(id).await {
            Ok(Some(user)) => Ok(ResolvedOwner {
                id,
                email: user.email().as_str().to_owned(),
            }),
            Ok(None) => Err(UserLookupError::NotFound(id)),
            Err(err) => Err(UserLookupError::lookup(err)),
        }
    }
}

/// Owner resolver simulating an unreachable user service.
pub struct UnreachableResolver;

#[async_trait]
impl UserResolver for UnreachableResolver {
    async fn resolve(&self, _id: UserId) -> UserLookupResult<ResolvedOwner> {
        Err(UserLookupError::unavailable(io::Error::other(
            "connection refused",
        )))
    }
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh user endpoint over an empty in-memory store.
#[fixture]
pub fn user_endpoint() -> TestUserEndpoint {
    GrpcUserEndpoint::new(user_service(Arc::new(InMemoryUserRepository::new())))
}

/// Provides both endpoints wired over the same user store.
///
/// Task creation on the returned task endpoint resolves owners against
/// the user endpoint's store, mirroring the deployed two-service pair.
#[fixture]
pub fn stack() -> (TestUserEndpoint, TestTaskEndpoint) {
    let users = Arc::new(InMemoryUserRepository::new());
    let resolver = AccountBackedResolver {
        service: user_service(Arc::clone(&users)),
    };
    (
        GrpcUserEndpoint::new(user_service(users)),
        task_endpoint(resolver),
    )
}

/// Builds a task endpoint over an empty store with the given resolver.
pub fn task_endpoint<U: UserResolver>(
    resolver: U,
) -> GrpcTaskEndpoint<InMemoryTaskRepository, DefaultClock, U> {
    GrpcTaskEndpoint::new(
        TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        ),
        Arc::new(resolver),
    )
}

fn user_service(
    repository: Arc<InMemoryUserRepository>,
) -> UserAccountService<InMemoryUserRepository, DefaultClock> {
    UserAccountService::new(repository, Arc::new(DefaultClock))
}

/// Registers a user through the endpoint and returns the wire response.
///
/// # Panics
///
/// Panics if the creation is rejected.
pub fn register_user(
    rt: &Runtime,
    endpoint: &TestUserEndpoint,
    email: &str,
    password: &str,
) -> user_v1::User {
    use user_v1::user_service_server::UserService;

    rt.block_on(endpoint.create_user(Request::new(user_v1::CreateUserRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })))
    .expect("user creation should succeed")
    .into_inner()
    .user
    .expect("response should carry a user")
}

/// Creates a task through the endpoint and returns the wire response.
///
/// # Panics
///
/// Panics if the creation is rejected.
pub fn create_task<U: UserResolver + 'static>(
    rt: &Runtime,
    endpoint: &GrpcTaskEndpoint<InMemoryTaskRepository, DefaultClock, U>,
    title: &str,
    user_id: u32,
) -> task_v1::Task {
    use task_v1::task_service_server::TaskService;

    rt.block_on(endpoint.create_task(Request::new(task_v1::CreateTaskRequest {
        title: title.to_owned(),
        is_done: false,
        user_id,
    })))
    .expect("task creation should succeed")
    .into_inner()
    .task
    .expect("response should carry a task")
}

/// Lists every task held by the endpoint's store.
///
/// # Panics
///
/// Panics if listing fails.
pub fn all_tasks<U: UserResolver + 'static>(
    rt: &Runtime,
    endpoint: &GrpcTaskEndpoint<InMemoryTaskRepository, DefaultClock, U>,
) -> Vec<task_v1::Task> {
    use task_v1::task_service_server::TaskService;

    rt.block_on(endpoint.get_task_list(Request::new(task_v1::GetTaskListRequest {})))
        .expect("listing should succeed")
        .into_inner()
        .tasks
}
