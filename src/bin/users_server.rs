//! gRPC server binary for the user account service.
//!
//! Reads its configuration from the environment, serves the user endpoint
//! over a `PostgreSQL`-backed repository, and drains in-flight requests on
//! interrupt.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use tasktrack::config::UsersServerConfig;
use tasktrack::proto::user_v1::user_service_server::UserServiceServer;
use tasktrack::user::{
    adapters::grpc::GrpcUserEndpoint, adapters::postgres::PostgresUserRepository,
    services::UserAccountService,
};
use tonic::transport::Server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = UsersServerConfig::from_env()?;
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;

    let repository = Arc::new(PostgresUserRepository::new(pool));
    let service = UserAccountService::new(repository, Arc::new(DefaultClock));
    let endpoint = GrpcUserEndpoint::new(service);

    tracing::info!(addr = %config.listen_addr, "user service listening");
    Server::builder()
        .add_service(UserServiceServer::new(endpoint))
        .serve_with_shutdown(config.listen_addr, shutdown_signal())
        .await?;
    tracing::info!("user service stopped");
    Ok(())
}

/// Resolves when the process receives an interrupt.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
