//! Domain types and pure logic: configuration, naming, README rewriting.

pub mod bootstrap;
pub mod config;
mod error;
pub mod naming;
pub mod readme;

pub use bootstrap::BootstrapRequest;
pub use error::AppError;
