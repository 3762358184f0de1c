//! Domain model for user accounts.
//!
//! The user domain models identity, validated credentials, and account
//! records while keeping all infrastructure concerns outside of the domain
//! boundary.

mod credentials;
mod error;
mod ids;
mod user;

pub use credentials::{EmailAddress, Password, PasswordHash};
pub use error::UserDomainError;
pub use ids::UserId;
pub use user::{PersistedUserData, User, UserDraft};
