//! gRPC implementation of the owner-resolution port.
//!
//! Holds one lazily-established channel to the remote user service for the
//! lifetime of the owning process; the connection is released when the
//! resolver is dropped at shutdown. Every lookup runs under a fixed time
//! budget and is additionally cut short when the caller's own deadline
//! expires first. No retries are performed here.

use crate::proto::user_v1::user_service_client::UserServiceClient;
use crate::proto::user_v1::GetUserRequest;
use crate::task::ports::{ResolvedOwner, UserLookupError, UserLookupResult, UserResolver};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Status};

/// Per-call time budget applied to every owner lookup.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Owner resolver backed by the remote user service.
#[derive(Debug, Clone)]
pub struct GrpcUserResolver {
    client: UserServiceClient<Channel>,
    timeout: Duration,
}

/// The remote service answered OK but carried no user payload.
#[derive(Debug, Clone, Error)]
#[error("user payload missing from lookup response")]
struct MissingUserPayload;

impl GrpcUserResolver {
    /// Creates a resolver over a lazily-established channel.
    ///
    /// The connection is made on first use and reused for every subsequent
    /// lookup.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the address is not a valid endpoint
    /// URI.
    pub fn connect_lazy(addr: impl Into<String>) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(addr.into())?.connect_lazy();
        Ok(Self {
            client: UserServiceClient::new(channel),
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        })
    }

    /// Overrides the per-call time budget.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl UserResolver for GrpcUserResolver {
    async fn resolve(&self, id: UserId) -> UserLookupResult<ResolvedOwner> {
        // Cloning reuses the underlying channel; no reconnection per call.
        let mut client = self.client.clone();
        let request = GetUserRequest { id: id.value() };

        let response = tokio::time::timeout(self.timeout, client.get_user(request))
            .await
            .map_err(|elapsed| {
                tracing::warn!(user_id = id.value(), "owner lookup timed out");
                UserLookupError::unavailable(elapsed)
            })?
            .map_err(|status| classify_status(id, status))?;

        let user = response
            .into_inner()
            .user
            .ok_or_else(|| UserLookupError::lookup(MissingUserPayload))?;
        Ok(ResolvedOwner {
            id,
            email: user.email,
        })
    }
}

/// Translates a remote status into the port's failure taxonomy.
fn classify_status(id: UserId, status: Status) -> UserLookupError {
    match status.code() {
        Code::NotFound => UserLookupError::NotFound(id),
        Code::Unavailable | Code::DeadlineExceeded => UserLookupError::unavailable(status),
        _ => UserLookupError::lookup(status),
    }
}
