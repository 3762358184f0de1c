//! Cross-context tests for owner-checked task creation.
//!
//! The task endpoint resolves owners against the user endpoint's store, so
//! these tests cover the deployed call path: confirm the owner, then
//! persist, failing closed whenever confirmation is impossible.

use crate::in_memory::helpers::{
    TestTaskEndpoint, TestUserEndpoint, UnreachableResolver, all_tasks, create_task,
    register_user, runtime, stack, task_endpoint,
};
use rstest::rstest;
use std::io;
use tasktrack::proto::task_v1 as wire;
use tasktrack::proto::task_v1::task_service_server::TaskService;
use tasktrack::proto::user_v1::{self, user_service_server::UserService};
use tokio::runtime::Runtime;
use tonic::{Code, Request};

/// Tests the happy path: register a user, create a task owned by them,
/// and find exactly that task in the per-owner listing.
#[rstest]
fn registered_owner_can_receive_tasks(
    runtime: io::Result<Runtime>,
    stack: (TestUserEndpoint, TestTaskEndpoint),
) {
    let rt = runtime.expect("runtime creation");
    let owner = register_user(&rt, &stack.0, "a@b.com", "secret1");

    let task = create_task(&rt, &stack.1, "write spec", owner.id);
    assert_eq!(task.user_id, owner.id);

    let listed = rt
        .block_on(
            stack
                .1
                .list_tasks_by_user(Request::new(wire::ListTasksByUserRequest {
                    user_id: owner.id,
                })),
        )
        .expect("listing should succeed")
        .into_inner()
        .tasks;
    assert_eq!(listed, vec![task]);
}

/// Tests that a task for an unregistered owner is refused with `NotFound`
/// and nothing is persisted.
#[rstest]
fn unregistered_owner_is_refused(
    runtime: io::Result<Runtime>,
    stack: (TestUserEndpoint, TestTaskEndpoint),
) {
    let rt = runtime.expect("runtime creation");

    let status = rt
        .block_on(stack.1.create_task(Request::new(wire::CreateTaskRequest {
            title: "write spec".to_owned(),
            is_done: false,
            user_id: 42,
        })))
        .expect_err("unregistered owner should be refused");
    assert_eq!(status.code(), Code::NotFound);
    assert!(all_tasks(&rt, &stack.1).is_empty());
}

/// Tests that deleting the owner closes the door: subsequent task
/// creation for that owner is refused.
#[rstest]
fn deleted_owner_is_refused(
    runtime: io::Result<Runtime>,
    stack: (TestUserEndpoint, TestTaskEndpoint),
) {
    let rt = runtime.expect("runtime creation");
    let owner = register_user(&rt, &stack.0, "a@b.com", "secret1");
    create_task(&rt, &stack.1, "write spec", owner.id);

    rt.block_on(
        stack
            .0
            .delete_user(Request::new(user_v1::DeleteUserRequest { id: owner.id })),
    )
    .expect("delete should succeed");

    let status = rt
        .block_on(stack.1.create_task(Request::new(wire::CreateTaskRequest {
            title: "review spec".to_owned(),
            is_done: false,
            user_id: owner.id,
        })))
        .expect_err("deleted owner should be refused");
    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(all_tasks(&rt, &stack.1).len(), 1);
}

/// Tests that an unreachable user service fails the creation with
/// `Internal` and persists nothing.
#[rstest]
fn unreachable_user_service_fails_closed(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let endpoint = task_endpoint(UnreachableResolver);

    let status = rt
        .block_on(endpoint.create_task(Request::new(wire::CreateTaskRequest {
            title: "write spec".to_owned(),
            is_done: false,
            user_id: 1,
        })))
        .expect_err("unreachable user service should fail the creation");
    assert_eq!(status.code(), Code::Internal);
    assert!(all_tasks(&rt, &endpoint).is_empty());
}

/// Tests that a zero owner id is rejected before any lookup or write.
#[rstest]
fn zero_owner_id_is_rejected(
    runtime: io::Result<Runtime>,
    stack: (TestUserEndpoint, TestTaskEndpoint),
) {
    let rt = runtime.expect("runtime creation");

    let status = rt
        .block_on(stack.1.create_task(Request::new(wire::CreateTaskRequest {
            title: "write spec".to_owned(),
            is_done: false,
            user_id: 0,
        })))
        .expect_err("zero owner id should be rejected");
    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(all_tasks(&rt, &stack.1).is_empty());
}
