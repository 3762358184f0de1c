//! Task management and owner-checked task creation.
//!
//! Tasks are plain records owned by a user account that lives in a separate
//! service. Creating a task is the one cross-service operation: the gRPC
//! endpoint resolves the owning user through the [`ports::UserResolver`]
//! capability before anything is persisted, and refuses the write when the
//! owner cannot be confirmed. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
