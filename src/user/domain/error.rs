//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing domain user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user identifier is zero.
    #[error("user id must be greater than zero")]
    InvalidUserId,

    /// The email address is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The email address does not follow `local@domain.tld` shape.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The password is shorter than the required minimum.
    #[error("password must be at least {minimum} characters, got {actual}")]
    PasswordTooShort {
        /// Required minimum length.
        minimum: usize,
        /// Length of the rejected password.
        actual: usize,
    },
}
