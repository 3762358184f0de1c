//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services
//! and by the endpoint orchestration.

pub mod repository;
pub mod resolver;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use resolver::{ResolvedOwner, UserLookupError, UserLookupResult, UserResolver};
