pub mod app;
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod releases;
pub mod store;
#[cfg(test)]
pub mod test_utils;

pub use error::{Result, SuError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
