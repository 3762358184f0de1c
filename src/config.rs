//! Explicit configuration for the service binaries.
//!
//! Each binary receives a configuration struct at construction time instead
//! of reading globals deep inside the stack. The structs are sourced from
//! environment variables here and nowhere else.

use std::net::SocketAddr;
use thiserror::Error;

/// Default listen address for the user service.
pub const DEFAULT_USERS_LISTEN_ADDR: &str = "0.0.0.0:50051";

/// Default listen address for the task service.
pub const DEFAULT_TASKS_LISTEN_ADDR: &str = "0.0.0.0:50052";

/// Default address the task service uses to reach the user service.
pub const DEFAULT_USERS_SERVICE_ADDR: &str = "http://localhost:50051";

/// Errors raised while assembling configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("required environment variable {0} is not set")]
    MissingVariable(&'static str),

    /// The listen address could not be parsed.
    #[error("invalid listen address '{value}'")]
    InvalidListenAddr {
        /// The rejected value.
        value: String,
        /// Parse failure reported by the standard library.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuration for the user service binary.
#[derive(Debug, Clone)]
pub struct UsersServerConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Address the gRPC server binds to.
    pub listen_addr: SocketAddr,
}

impl UsersServerConfig {
    /// Builds the configuration from `DATABASE_URL` and `LISTEN_ADDR`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is unset or the listen
    /// address does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            listen_addr: parse_listen_addr(&var_or("LISTEN_ADDR", DEFAULT_USERS_LISTEN_ADDR))?,
        })
    }
}

/// Configuration for the task service binary.
#[derive(Debug, Clone)]
pub struct TasksServerConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Address the gRPC server binds to.
    pub listen_addr: SocketAddr,
    /// Address of the remote user service consulted during task creation.
    pub users_service_addr: String,
}

impl TasksServerConfig {
    /// Builds the configuration from `DATABASE_URL`, `LISTEN_ADDR`, and
    /// `USERS_SERVICE_ADDR`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is unset or the listen
    /// address does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            listen_addr: parse_listen_addr(&var_or("LISTEN_ADDR", DEFAULT_TASKS_LISTEN_ADDR))?,
            users_service_addr: var_or("USERS_SERVICE_ADDR", DEFAULT_USERS_SERVICE_ADDR),
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVariable(name))
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

fn parse_listen_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidListenAddr {
        value: value.to_owned(),
        source,
    })
}
