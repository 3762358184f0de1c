//! Adapter implementations of the task ports.

pub mod grpc;
pub mod memory;
pub mod postgres;
