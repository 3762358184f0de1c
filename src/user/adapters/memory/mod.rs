//! In-memory user repository for tests.

mod user;

pub use user::InMemoryUserRepository;
