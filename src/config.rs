use std::path::PathBuf;
use std::time::Duration;

use crate::codec;
use crate::error::{PuzzleError, Result};

/// Settings for one call to [`crate::solve`].
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Board side length.
    pub size: usize,
    /// Delay between frames when playing back a solution.
    pub playback_interval_ms: u64,
    /// Hand the finished path to the presenter.
    pub animate: bool,
    /// Seed for the board generator; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Give up after this many expansions.
    pub expansion_limit: Option<u64>,
    /// Best-effort CSV dump of the board being expanded.
    pub snapshot_path: Option<PathBuf>,
    /// Expansions between two snapshot writes.
    pub snapshot_interval: u64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            size: 4,
            playback_interval_ms: 25,
            animate: false,
            seed: None,
            expansion_limit: None,
            snapshot_path: None,
            snapshot_interval: 1000,
        }
    }
}

impl SolveConfig {
    pub fn validate(&self) -> Result<()> {
        if !codec::supports(self.size) {
            return Err(PuzzleError::UnsupportedSize(self.size));
        }
        if self.snapshot_path.is_some() && self.snapshot_interval == 0 {
            return Err(PuzzleError::InvalidConfig(
                "snapshot interval must be at least 1".to_string(),
            ));
        }
        if self.expansion_limit == Some(0) {
            return Err(PuzzleError::InvalidConfig(
                "expansion limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms)
    }
}
