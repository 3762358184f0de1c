//! `PostgreSQL` repository implementation for user account storage.

use super::{
    models::{NewUserRow, UserRow},
    schema::users,
};
use crate::user::{
    domain::{EmailAddress, PasswordHash, PersistedUserData, User, UserDraft, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by user adapters.
pub type UserPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: UserPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: UserPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, draft: &UserDraft) -> UserRepositoryResult<User> {
        let email = draft.email().clone();
        let new_row = NewUserRow {
            email: draft.email().as_str().to_owned(),
            password_hash: draft.password().as_str().to_owned(),
            created_at: draft.created_at(),
            updated_at: draft.updated_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(users::table)
                .values(&new_row)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .map_err(|err| classify_unique_violation(err, &email))?;
            row_to_user(row)
        })
        .await
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<User> {
        let id = user.id();
        let raw_id = row_id(id)?;
        let email = user.email().clone();
        let email_value = user.email().as_str().to_owned();
        let password_hash = user.password().as_str().to_owned();
        let updated_at = user.updated_at();

        self.run_blocking(move |connection| {
            let row = diesel::update(users::table.filter(users::id.eq(raw_id)))
                .set((
                    users::email.eq(email_value),
                    users::password_hash.eq(password_hash),
                    users::updated_at.eq(updated_at),
                ))
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .optional()
                .map_err(|err| classify_unique_violation(err, &email))?;
            row.map_or(Err(UserRepositoryError::NotFound(id)), row_to_user)
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let raw_id = row_id(id)?;
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(raw_id))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        self.run_blocking(|connection| {
            let rows = users::table
                .order(users::id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let raw_id = row_id(id)?;
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(users::table.filter(users::id.eq(raw_id)))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn classify_unique_violation(err: DieselError, email: &EmailAddress) -> UserRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserRepositoryError::DuplicateEmail(email.clone())
        }
        _ => UserRepositoryError::persistence(err),
    }
}

fn row_id(id: UserId) -> UserRepositoryResult<i32> {
    i32::try_from(id.value()).map_err(UserRepositoryError::persistence)
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let raw_id = u32::try_from(row.id).map_err(UserRepositoryError::persistence)?;
    let id = UserId::new(raw_id).map_err(UserRepositoryError::persistence)?;
    let email = EmailAddress::new(row.email).map_err(UserRepositoryError::persistence)?;

    Ok(User::from_persisted(PersistedUserData {
        id,
        email,
        password: PasswordHash::from_stored(row.password_hash),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
