//! Validated credential types for user accounts.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Validated email address.
///
/// Accepts the `local@domain.tld` shape: a non-empty local part drawn from
/// ASCII alphanumerics plus `._%+-`, a dotted domain, and an alphabetic
/// top-level segment of at least two characters. The whole input must
/// match; leading or trailing whitespace is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyEmail`] when the value is blank and
    /// [`UserDomainError::InvalidEmail`] when it does not parse as an
    /// address.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(UserDomainError::EmptyEmail);
        }

        let is_valid = raw
            .split_once('@')
            .is_some_and(|(local, domain)| is_valid_local_part(local) && is_valid_domain(domain));
        if !is_valid {
            return Err(UserDomainError::InvalidEmail(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    domain.rsplit_once('.').is_some_and(|(head, tld)| {
        !head.is_empty()
            && head
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
            && tld.len() >= 2
            && tld.chars().all(|c| c.is_ascii_alphabetic())
    })
}

/// Validated plain-text password, held only until it is hashed.
///
/// Intentionally opaque: no `Display`, no serde, and the debug rendering
/// masks the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Minimum accepted password length.
    pub const MIN_LENGTH: usize = 6;

    /// Creates a validated password.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyPassword`] when the value is empty
    /// and [`UserDomainError::PasswordTooShort`] when it is shorter than
    /// [`Self::MIN_LENGTH`].
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(UserDomainError::EmptyPassword);
        }
        let actual = raw.chars().count();
        if actual < Self::MIN_LENGTH {
            return Err(UserDomainError::PasswordTooShort {
                minimum: Self::MIN_LENGTH,
                actual,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the password as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// SHA-256 digest of a password, hex-encoded for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hashes a validated password for persistence.
    #[must_use]
    pub fn digest(password: &Password) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(password.as_str().as_bytes());
        let hex = hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        Self(hex)
    }

    /// Reconstructs a hash from its stored representation.
    #[must_use]
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the hex digest as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
