//! CLI subcommands.

pub mod reset;
pub mod seed;
pub mod sitemap;

use thiserror::Error;

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store error: {0}")]
    Store(#[from] folio_admin::store::StoreError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
