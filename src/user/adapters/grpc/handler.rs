//! gRPC handler translating wire requests into user service calls.
//!
//! Credential validation happens here, at the endpoint boundary, so invalid
//! input is rejected before any service or store work. Domain errors map to
//! `InvalidArgument`, missing users to `NotFound`, email collisions to
//! `AlreadyExists`, and everything else to `Internal`.

use crate::proto::user_v1 as wire;
use crate::proto::user_v1::user_service_server::UserService;
use crate::user::{
    domain::{EmailAddress, Password, User, UserDomainError, UserId},
    ports::{UserRepository, UserRepositoryError},
    services::UserAccountService,
};
use mockable::Clock;
use tonic::{Request, Response, Status};

/// gRPC endpoint for user account management.
#[derive(Clone)]
pub struct GrpcUserEndpoint<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    service: UserAccountService<R, C>,
}

impl<R, C> GrpcUserEndpoint<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates an endpoint over the given account service.
    #[must_use]
    pub const fn new(service: UserAccountService<R, C>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<R, C> UserService for GrpcUserEndpoint<R, C>
where
    R: UserRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    async fn get_user(
        &self,
        request: Request<wire::GetUserRequest>,
    ) -> Result<Response<wire::UserResponse>, Status> {
        let id = parse_user_id(request.into_inner().id)?;
        let user = self
            .service
            .get(id)
            .await
            .map_err(repository_status)?
            .ok_or_else(|| Status::not_found(format!("user with id {id} not found")))?;
        Ok(Response::new(wire::UserResponse {
            user: Some(to_wire(&user)),
        }))
    }

    async fn create_user(
        &self,
        request: Request<wire::CreateUserRequest>,
    ) -> Result<Response<wire::UserResponse>, Status> {
        let req = request.into_inner();
        let email = EmailAddress::new(req.email).map_err(invalid_argument)?;
        let password = Password::new(req.password).map_err(invalid_argument)?;
        let user = self
            .service
            .create(email, &password)
            .await
            .map_err(repository_status)?;
        Ok(Response::new(wire::UserResponse {
            user: Some(to_wire(&user)),
        }))
    }

    async fn update_user(
        &self,
        request: Request<wire::UpdateUserRequest>,
    ) -> Result<Response<wire::UserResponse>, Status> {
        let req = request.into_inner();
        let id = parse_user_id(req.id)?;
        let email = req
            .email
            .map(EmailAddress::new)
            .transpose()
            .map_err(invalid_argument)?;
        let password = req
            .password
            .map(Password::new)
            .transpose()
            .map_err(invalid_argument)?;

        let user = self
            .service
            .update(id, email, password.as_ref())
            .await
            .map_err(repository_status)?;
        Ok(Response::new(wire::UserResponse {
            user: Some(to_wire(&user)),
        }))
    }

    async fn list_users(
        &self,
        _request: Request<wire::ListUsersRequest>,
    ) -> Result<Response<wire::UserListResponse>, Status> {
        let users = self.service.list().await.map_err(repository_status)?;
        Ok(Response::new(wire::UserListResponse {
            users: users.iter().map(to_wire).collect(),
        }))
    }

    async fn delete_user(
        &self,
        request: Request<wire::DeleteUserRequest>,
    ) -> Result<Response<wire::DeleteUserResponse>, Status> {
        let id = parse_user_id(request.into_inner().id)?;
        self.service.delete(id).await.map_err(repository_status)?;
        Ok(Response::new(wire::DeleteUserResponse {}))
    }
}

/// Maps a wire user id to the domain type, rejecting zero.
fn parse_user_id(raw: u32) -> Result<UserId, Status> {
    UserId::new(raw).map_err(invalid_argument)
}

fn invalid_argument(err: UserDomainError) -> Status {
    Status::invalid_argument(err.to_string())
}

fn repository_status(err: UserRepositoryError) -> Status {
    match err {
        UserRepositoryError::NotFound(id) => {
            Status::not_found(format!("user with id {id} not found"))
        }
        UserRepositoryError::DuplicateEmail(email) => {
            Status::already_exists(format!("email address {email} is already registered"))
        }
        UserRepositoryError::Persistence(err) => {
            tracing::warn!(error = %err, "user store failure");
            Status::internal("user store failure")
        }
    }
}

/// Wire rendering of a user; the password digest never leaves the service.
fn to_wire(user: &User) -> wire::User {
    wire::User {
        id: user.id().value(),
        email: user.email().as_str().to_owned(),
    }
}
