//! Service layer for user account creation, update, and lookup.
//!
//! Credential validation happens at the endpoint boundary; the service
//! receives already-validated domain types, hashes passwords before they
//! reach storage, and mediates every mutation of the store.

use crate::user::{
    domain::{EmailAddress, Password, PasswordHash, User, UserDraft, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;

/// User account orchestration service.
#[derive(Clone)]
pub struct UserAccountService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UserAccountService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new user account service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a user from validated credentials.
    ///
    /// The password is hashed here; plain text never reaches the store.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateEmail`] when the email is
    /// already registered, or a persistence error.
    pub async fn create(&self, email: EmailAddress, password: &Password) -> UserRepositoryResult<User> {
        let draft = UserDraft::new(email, PasswordHash::digest(password), &*self.clock);
        self.repository.insert(&draft).await
    }

    /// Applies the provided fields to an existing user.
    ///
    /// Absent fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not
    /// exist.
    pub async fn update(
        &self,
        id: UserId,
        email: Option<EmailAddress>,
        password: Option<&Password>,
    ) -> UserRepositoryResult<User> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserRepositoryError::NotFound(id))?;

        if let Some(new_email) = email {
            user.set_email(new_email, &*self.clock);
        }
        if let Some(new_password) = password {
            user.set_password(PasswordHash::digest(new_password), &*self.clock);
        }

        self.repository.update(&user).await
    }

    /// Removes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not
    /// exist; deleting the same identifier twice fails both times.
    pub async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        self.repository.delete(id).await
    }

    /// Retrieves a user by identifier.
    ///
    /// Returns `Ok(None)` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the lookup fails.
    pub async fn get(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.repository.find_by_id(id).await
    }

    /// Returns all users.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the listing fails.
    pub async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        self.repository.list().await
    }
}
