//! userfetch — fetch user records and list those whose city matches a prefix
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod fetch;
pub mod filter;
pub mod logging;
pub mod models;
pub mod output;
pub mod pipeline;
