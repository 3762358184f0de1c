//! gRPC adapters for the task context.
//!
//! [`handler`] exposes the task service to remote callers; [`user_client`]
//! implements the owner-resolution port against the remote user service.

pub mod handler;
pub mod user_client;

pub use handler::GrpcTaskEndpoint;
pub use user_client::{DEFAULT_LOOKUP_TIMEOUT, GrpcUserResolver};
