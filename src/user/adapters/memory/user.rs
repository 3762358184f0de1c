//! In-memory repository for user account tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{PersistedUserData, User, UserDraft, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
///
/// Identifiers are assigned from a monotonic counter starting at one,
/// mirroring the auto-increment behaviour of the relational store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug)]
struct InMemoryUserState {
    users: BTreeMap<u32, User>,
    next_id: u32,
}

impl Default for InMemoryUserState {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(state: &InMemoryUserState, candidate: &User) -> bool {
    state
        .users
        .values()
        .any(|user| user.id() != candidate.id() && user.email() == candidate.email())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, draft: &UserDraft) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state
            .users
            .values()
            .any(|user| user.email() == draft.email())
        {
            return Err(UserRepositoryError::DuplicateEmail(draft.email().clone()));
        }

        let raw_id = state.next_id;
        let id = UserId::new(raw_id).map_err(UserRepositoryError::persistence)?;
        let user = User::from_persisted(PersistedUserData {
            id,
            email: draft.email().clone(),
            password: draft.password().clone(),
            created_at: draft.created_at(),
            updated_at: draft.updated_at(),
        });

        state.next_id += 1;
        state.users.insert(raw_id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.users.contains_key(&user.id().value()) {
            return Err(UserRepositoryError::NotFound(user.id()));
        }
        if email_taken(&state, user) {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }

        state.users.insert(user.id().value(), user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.users.get(&id.value()).cloned())
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.users.values().cloned().collect())
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        match state.users.remove(&id.value()) {
            Some(_) => Ok(()),
            None => Err(UserRepositoryError::NotFound(id)),
        }
    }
}
