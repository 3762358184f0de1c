//! gRPC server binary for the task service.
//!
//! Reads its configuration from the environment, serves the task endpoint
//! over a `PostgreSQL`-backed repository, and holds one long-lived client
//! channel to the remote user service for owner resolution. The channel is
//! released when the process shuts down and the resolver is dropped.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use tasktrack::config::TasksServerConfig;
use tasktrack::proto::task_v1::task_service_server::TaskServiceServer;
use tasktrack::task::{
    adapters::grpc::{GrpcTaskEndpoint, GrpcUserResolver},
    adapters::postgres::PostgresTaskRepository,
    services::TaskLifecycleService,
};
use tonic::transport::Server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = TasksServerConfig::from_env()?;
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let service = TaskLifecycleService::new(repository, Arc::new(DefaultClock));
    let resolver = Arc::new(GrpcUserResolver::connect_lazy(
        config.users_service_addr.clone(),
    )?);
    let endpoint = GrpcTaskEndpoint::new(service, resolver);

    tracing::info!(
        addr = %config.listen_addr,
        users_service = %config.users_service_addr,
        "task service listening"
    );
    Server::builder()
        .add_service(TaskServiceServer::new(endpoint))
        .serve_with_shutdown(config.listen_addr, shutdown_signal())
        .await?;
    tracing::info!("task service stopped");
    Ok(())
}

/// Resolves when the process receives an interrupt.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
