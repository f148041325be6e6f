//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod play;
pub mod reset;
pub mod status;
pub mod version;

use std::sync::Arc;

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::config::{ConfigLoader, GameConfig};
use crate::error::GhostwakeError;
use crate::persist::{FileStore, MemoryStore, StateStore};

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if configuration loading or the dispatched command
/// handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), GhostwakeError> {
    let mut config = ConfigLoader::from_env().load(cli.config.as_deref())?;
    if let Some(dir) = cli.state_dir {
        config.state_dir = Some(dir);
    }

    match cli.command {
        Commands::Play(args) => play::run(&args, config).await,
        Commands::Status(args) => status::run(&args, &config),
        Commands::Reset(args) => reset::run(&args, &config),
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Opens the store described by `config`.
///
/// Without a state directory (or when `ephemeral` is set) progress lives
/// in memory for the lifetime of the process.
///
/// # Errors
///
/// Returns `StoreError` if the state directory cannot be created.
pub fn open_store(
    config: &GameConfig,
    ephemeral: bool,
) -> Result<Arc<dyn StateStore>, GhostwakeError> {
    match &config.state_dir {
        Some(dir) if !ephemeral => {
            debug!(dir = %dir.display(), "using file store");
            Ok(Arc::new(FileStore::open(dir)?))
        }
        _ => {
            debug!("using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Opens the configured store without creating the state directory.
///
/// Used by commands that only read or erase progress.
#[must_use]
pub fn existing_store(config: &GameConfig) -> Arc<dyn StateStore> {
    match &config.state_dir {
        Some(dir) => Arc::new(FileStore::new(dir)),
        None => Arc::new(MemoryStore::new()),
    }
}
