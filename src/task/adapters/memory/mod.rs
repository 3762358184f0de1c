//! In-memory task repository for tests.

mod task;

pub use task::InMemoryTaskRepository;
