//! Tasktrack: paired user and task management services over gRPC.
//!
//! The crate hosts two bounded contexts behind independent gRPC endpoints:
//! user accounts and the tasks owned by them. Task creation is the one place
//! the two coordinate: the task endpoint confirms the owning user with the
//! remote user service before anything is persisted.
//!
//! # Architecture
//!
//! Both contexts follow hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, gRPC)
//!
//! # Modules
//!
//! - [`user`]: user accounts, credential validation, and the user endpoint
//! - [`task`]: task records, owner resolution, and the task endpoint
//! - [`config`]: explicit per-binary configuration
//! - [`proto`]: generated wire types

pub mod config;
pub mod proto;
pub mod task;
pub mod user;
