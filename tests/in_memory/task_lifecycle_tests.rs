//! Task CRUD tests through the gRPC task endpoint.

use crate::in_memory::helpers::{
    TestTaskEndpoint, TestUserEndpoint, all_tasks, create_task, register_user, runtime, stack,
};
use rstest::rstest;
use std::io;
use tasktrack::proto::task_v1 as wire;
use tasktrack::proto::task_v1::task_service_server::TaskService;
use tokio::runtime::Runtime;
use tonic::{Code, Request};

fn seeded(
    rt: &Runtime,
    stack: &(TestUserEndpoint, TestTaskEndpoint),
) -> u32 {
    register_user(rt, &stack.0, "a@b.com", "secret1").id
}

/// Tests that created tasks receive consecutive ids and list in id order.
#[rstest]
fn created_tasks_list_in_insertion_order(
    runtime: io::Result<Runtime>,
    stack: (TestUserEndpoint, TestTaskEndpoint),
) {
    let rt = runtime.expect("runtime creation");
    let owner = seeded(&rt, &stack);

    let first = create_task(&rt, &stack.1, "write spec", owner);
    let second = create_task(&rt, &stack.1, "review spec", owner);
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let listed = all_tasks(&rt, &stack.1);
    assert_eq!(listed, vec![first, second]);
}

/// Tests that an update rewrites title and completion and persists.
#[rstest]
fn update_rewrites_title_and_completion(
    runtime: io::Result<Runtime>,
    stack: (TestUserEndpoint, TestTaskEndpoint),
) {
    let rt = runtime.expect("runtime creation");
    let owner = seeded(&rt, &stack);
    let created = create_task(&rt, &stack.1, "write spec", owner);
    assert!(!created.is_done);

    let updated = rt
        .block_on(stack.1.update_task(Request::new(wire::UpdateTaskRequest {
            id: created.id,
            title: "write the spec".to_owned(),
            is_done: true,
        })))
        .expect("update should succeed")
        .into_inner()
        .task
        .expect("response should carry a task");
    assert_eq!(updated.title, "write the spec");
    assert!(updated.is_done);
    assert_eq!(updated.user_id, owner);

    assert_eq!(all_tasks(&rt, &stack.1), vec![updated]);
}

/// Tests that a blank title on update is rejected and the stored task is
/// untouched.
#[rstest]
fn blank_title_update_is_rejected(
    runtime: io::Result<Runtime>,
    stack: (TestUserEndpoint, TestTaskEndpoint),
) {
    let rt = runtime.expect("runtime creation");
    let owner = seeded(&rt, &stack);
    let created = create_task(&rt, &stack.1, "write spec", owner);

    let status = rt
        .block_on(stack.1.update_task(Request::new(wire::UpdateTaskRequest {
            id: created.id,
            title: "  \t ".to_owned(),
            is_done: true,
        })))
        .expect_err("blank title should be rejected");
    assert_eq!(status.code(), Code::InvalidArgument);

    assert_eq!(all_tasks(&rt, &stack.1), vec![created]);
}

/// Tests that deletion removes the task and a repeat delete reports
/// `NotFound`.
#[rstest]
fn delete_removes_the_task(
    runtime: io::Result<Runtime>,
    stack: (TestUserEndpoint, TestTaskEndpoint),
) {
    let rt = runtime.expect("runtime creation");
    let owner = seeded(&rt, &stack);
    let created = create_task(&rt, &stack.1, "write spec", owner);

    rt.block_on(stack.1.delete_task(Request::new(wire::DeleteTaskRequest {
        id: created.id,
    })))
    .expect("delete should succeed");
    assert!(all_tasks(&rt, &stack.1).is_empty());

    let repeat = rt
        .block_on(stack.1.delete_task(Request::new(wire::DeleteTaskRequest {
            id: created.id,
        })))
        .expect_err("repeat delete should be reported");
    assert_eq!(repeat.code(), Code::NotFound);
}

/// Tests that per-owner listing returns only that owner's tasks.
#[rstest]
fn listing_by_owner_filters_tasks(
    runtime: io::Result<Runtime>,
    stack: (TestUserEndpoint, TestTaskEndpoint),
) {
    let rt = runtime.expect("runtime creation");
    let first = register_user(&rt, &stack.0, "a@b.com", "secret1").id;
    let second = register_user(&rt, &stack.0, "c@d.org", "secret2").id;

    let mine = create_task(&rt, &stack.1, "write spec", first);
    create_task(&rt, &stack.1, "review spec", second);

    let listed = rt
        .block_on(
            stack
                .1
                .list_tasks_by_user(Request::new(wire::ListTasksByUserRequest {
                    user_id: first,
                })),
        )
        .expect("listing should succeed")
        .into_inner()
        .tasks;
    assert_eq!(listed, vec![mine]);
}
