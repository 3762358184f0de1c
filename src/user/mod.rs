//! User account management.
//!
//! Covers the full lifecycle of user accounts: creation with validated
//! credentials, optional-field updates, lookup, listing, and deletion, plus
//! the gRPC endpoint other services call to confirm a user exists. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
