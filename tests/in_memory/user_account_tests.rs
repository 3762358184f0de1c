//! User CRUD tests through the gRPC user endpoint.
//!
//! Exercises credential validation at the boundary, serial id assignment,
//! duplicate-email rejection, partial updates, and deletion.

use crate::in_memory::helpers::{TestUserEndpoint, register_user, runtime, user_endpoint};
use rstest::rstest;
use std::io;
use tasktrack::proto::user_v1 as wire;
use tasktrack::proto::user_v1::user_service_server::UserService;
use tokio::runtime::Runtime;
use tonic::{Code, Request};

/// Tests that users receive consecutive ids starting at one and that the
/// wire representation never carries credential material.
#[rstest]
fn created_users_receive_serial_ids(runtime: io::Result<Runtime>, user_endpoint: TestUserEndpoint) {
    let rt = runtime.expect("runtime creation");

    let first = register_user(&rt, &user_endpoint, "a@b.com", "secret1");
    let second = register_user(&rt, &user_endpoint, "c@d.org", "secret2");

    assert_eq!(first.id, 1);
    assert_eq!(first.email, "a@b.com");
    assert_eq!(second.id, 2);
    assert_eq!(second.email, "c@d.org");
}

/// Tests that registering an already-taken email is rejected with
/// `AlreadyExists` and leaves the store unchanged.
#[rstest]
fn duplicate_email_is_rejected(runtime: io::Result<Runtime>, user_endpoint: TestUserEndpoint) {
    let rt = runtime.expect("runtime creation");
    register_user(&rt, &user_endpoint, "a@b.com", "secret1");

    let status = rt
        .block_on(user_endpoint.create_user(Request::new(wire::CreateUserRequest {
            email: "a@b.com".to_owned(),
            password: "another1".to_owned(),
        })))
        .expect_err("duplicate email should be rejected");
    assert_eq!(status.code(), Code::AlreadyExists);

    let users = rt
        .block_on(user_endpoint.list_users(Request::new(wire::ListUsersRequest {})))
        .expect("listing should succeed")
        .into_inner()
        .users;
    assert_eq!(users.len(), 1);
}

/// Tests that malformed credentials never reach the store.
#[rstest]
#[case::bad_email("not-an-email", "secret1")]
#[case::empty_email("", "secret1")]
#[case::short_password("a@b.com", "short")]
#[case::empty_password("a@b.com", "")]
fn invalid_credentials_are_rejected(
    runtime: io::Result<Runtime>,
    user_endpoint: TestUserEndpoint,
    #[case] email: &str,
    #[case] password: &str,
) {
    let rt = runtime.expect("runtime creation");

    let status = rt
        .block_on(user_endpoint.create_user(Request::new(wire::CreateUserRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        })))
        .expect_err("invalid credentials should be rejected");
    assert_eq!(status.code(), Code::InvalidArgument);

    let users = rt
        .block_on(user_endpoint.list_users(Request::new(wire::ListUsersRequest {})))
        .expect("listing should succeed")
        .into_inner()
        .users;
    assert!(users.is_empty());
}

/// Tests that an update with only an email leaves the id intact and is
/// visible on subsequent lookup.
#[rstest]
fn partial_update_changes_only_the_given_field(
    runtime: io::Result<Runtime>,
    user_endpoint: TestUserEndpoint,
) {
    let rt = runtime.expect("runtime creation");
    let created = register_user(&rt, &user_endpoint, "a@b.com", "secret1");

    let updated = rt
        .block_on(user_endpoint.update_user(Request::new(wire::UpdateUserRequest {
            id: created.id,
            email: Some("renamed@b.com".to_owned()),
            password: None,
        })))
        .expect("update should succeed")
        .into_inner()
        .user
        .expect("response should carry a user");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "renamed@b.com");

    let fetched = rt
        .block_on(user_endpoint.get_user(Request::new(wire::GetUserRequest { id: created.id })))
        .expect("lookup should succeed")
        .into_inner()
        .user
        .expect("response should carry a user");
    assert_eq!(fetched.email, "renamed@b.com");
}

/// Tests that operations on missing or zero ids map to the expected codes.
#[rstest]
fn missing_and_zero_ids_are_reported(
    runtime: io::Result<Runtime>,
    user_endpoint: TestUserEndpoint,
) {
    let rt = runtime.expect("runtime creation");

    let missing = rt
        .block_on(user_endpoint.get_user(Request::new(wire::GetUserRequest { id: 999 })))
        .expect_err("missing user should be reported");
    assert_eq!(missing.code(), Code::NotFound);

    let zero = rt
        .block_on(user_endpoint.get_user(Request::new(wire::GetUserRequest { id: 0 })))
        .expect_err("zero id should be rejected");
    assert_eq!(zero.code(), Code::InvalidArgument);
}

/// Tests that a deleted user is gone and a repeat delete reports
/// `NotFound`.
#[rstest]
fn delete_removes_the_user(runtime: io::Result<Runtime>, user_endpoint: TestUserEndpoint) {
    let rt = runtime.expect("runtime creation");
    let created = register_user(&rt, &user_endpoint, "a@b.com", "secret1");

    rt.block_on(user_endpoint.delete_user(Request::new(wire::DeleteUserRequest {
        id: created.id,
    })))
    .expect("delete should succeed");

    let lookup = rt
        .block_on(user_endpoint.get_user(Request::new(wire::GetUserRequest { id: created.id })))
        .expect_err("deleted user should be gone");
    assert_eq!(lookup.code(), Code::NotFound);

    let repeat = rt
        .block_on(user_endpoint.delete_user(Request::new(wire::DeleteUserRequest {
            id: created.id,
        })))
        .expect_err("repeat delete should be reported");
    assert_eq!(repeat.code(), Code::NotFound);
}
