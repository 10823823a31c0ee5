//! Shared types used across all modules.
//!
//! Other modules import record types from here rather than reaching into
//! each other's internals.

pub mod user;

pub use user::{Address, UserRecord};
