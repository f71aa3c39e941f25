//! Route modules, one per endpoint.

pub mod generate;
pub mod health;
pub mod quotes;
