//! Owner-resolution port consulted before a task is persisted.
//!
//! Task creation must confirm that the owning user exists in the remote
//! user service. The capability is abstracted here so the orchestration
//! never touches network details and tests can substitute a fake.

use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for owner-resolution calls.
pub type UserLookupResult<T> = Result<T, UserLookupError>;

/// Owner confirmed by the remote user service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOwner {
    /// Confirmed user identifier.
    pub id: UserId,
    /// Email address reported by the user service.
    pub email: String,
}

/// Capability to confirm a user exists in the remote user service.
///
/// Implementations perform a single bounded-time lookup per call and never
/// retry; retry policy, if any, belongs to the caller.
#[async_trait]
pub trait UserResolver: Send + Sync {
    /// Confirms the user exists and returns its remote representation.
    ///
    /// # Errors
    ///
    /// Returns [`UserLookupError::NotFound`] when the remote service
    /// reports no such user, [`UserLookupError::Unavailable`] when it is
    /// unreachable or the call exceeds its time budget, and
    /// [`UserLookupError::Lookup`] for any other failure.
    async fn resolve(&self, id: UserId) -> UserLookupResult<ResolvedOwner>;
}

/// Failure modes of an owner-resolution call.
#[derive(Debug, Clone, Error)]
pub enum UserLookupError {
    /// The remote service reported that the user does not exist.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// The remote service is unreachable or the call timed out.
    #[error("user service unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// Any other remote status or transport failure.
    #[error("user lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserLookupError {
    /// Wraps an unavailability cause.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Wraps an unclassified lookup failure.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
