//! Domain model for task records.
//!
//! The task domain models validated titles, completion state, and the
//! by-value reference to the owning user while keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskDraft};
