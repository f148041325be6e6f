//! Configuration
//!
//! Game timing and persistence settings, layered as:
//! 1. Built-in defaults
//! 2. Optional YAML file
//! 3. `GHOSTWAKE_*` environment variables
//! 4. CLI flags (applied by the command handlers)

pub mod loader;

pub use loader::{ConfigLoader, RawConfig};

use std::path::PathBuf;
use std::time::Duration;

use crate::persist::DEFAULT_STORAGE_KEY;

/// Delay before the link activation auto-advances to the first node phase.
pub const DEFAULT_LINK_ADVANCE_DELAY: Duration = Duration::from_millis(1200);

/// Flourish played between the final node and the reveal.
pub const DEFAULT_REVEAL_FLOURISH: Duration = Duration::from_millis(1200);

/// Flourish used when reduced motion is requested.
pub const DEFAULT_REDUCED_MOTION_FLOURISH: Duration = Duration::from_millis(100);

/// Resolved game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Delay of the deferred auto-advance scheduled by a link activation.
    pub link_advance_delay: Duration,
    /// Flourish between the final node and the reveal.
    pub reveal_flourish: Duration,
    /// Flourish between the final node and the reveal under reduced motion.
    pub reduced_motion_flourish: Duration,
    /// Key under which progress is persisted.
    pub storage_key: String,
    /// Directory for the file store; `None` keeps progress in memory only.
    pub state_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            link_advance_delay: DEFAULT_LINK_ADVANCE_DELAY,
            reveal_flourish: DEFAULT_REVEAL_FLOURISH,
            reduced_motion_flourish: DEFAULT_REDUCED_MOTION_FLOURISH,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            state_dir: None,
        }
    }
}

impl GameConfig {
    /// Returns the flourish to wait before revealing.
    #[must_use]
    pub const fn flourish(&self, reduced_motion: bool) -> Duration {
        if reduced_motion {
            self.reduced_motion_flourish
        } else {
            self.reveal_flourish
        }
    }
}
