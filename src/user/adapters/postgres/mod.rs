//! `PostgreSQL` adapter for user account persistence.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{PostgresUserRepository, UserPgPool};
