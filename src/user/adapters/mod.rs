//! Adapter implementations of the user ports.

pub mod grpc;
pub mod memory;
pub mod postgres;
