//! Service layer for user account management.

pub mod account;

pub use account::UserAccountService;
