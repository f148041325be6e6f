//! `reset` command: erase persisted progress.

use crate::cli::args::ResetArgs;
use crate::config::GameConfig;
use crate::error::GhostwakeError;

use super::existing_store;

/// Removes the persisted game state.
///
/// # Errors
///
/// Returns `GhostwakeError::Store` if the stored value cannot be removed.
pub fn run(_args: &ResetArgs, config: &GameConfig) -> Result<(), GhostwakeError> {
    let Some(dir) = &config.state_dir else {
        println!("no state directory configured; nothing to reset");
        return Ok(());
    };

    let store = existing_store(config);
    store.remove(&config.storage_key)?;
    tracing::info!(dir = %dir.display(), key = %config.storage_key, "persisted progress erased");
    println!("experience reset. begin again.");
    Ok(())
}
