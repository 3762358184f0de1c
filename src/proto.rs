//! Generated wire types for the user and task gRPC endpoints.
//!
//! The message and service definitions live under `proto/` and are compiled
//! by `build.rs`.

#![allow(
    missing_docs,
    clippy::allow_attributes,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate,
    clippy::str_to_string,
    reason = "generated code"
)]

/// Wire types and service stubs for the user endpoint.
pub mod user_v1 {
    tonic::include_proto!("user.v1");
}

/// Wire types and service stubs for the task endpoint.
pub mod task_v1 {
    tonic::include_proto!("task.v1");
}
