//! gRPC adapter exposing the user account service.

pub mod handler;

pub use handler::GrpcUserEndpoint;
