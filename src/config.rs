// SPDX-License-Identifier: MPL-2.0
//! Persistable queue policy.
//!
//! Host applications that let users configure banner behavior (for example an
//! "urgent notifications replace everything" toggle, or a do-not-disturb
//! switch remembered across launches) can round-trip [`QueueConfig`] through
//! their settings file. Only the policy flags are persisted; queued banners
//! are process-lifetime state and are never written out.
//!
//! # Examples
//!
//! ```no_run
//! use banner_queue::{config, BannerQueue, QueueConfig};
//! use std::path::Path;
//!
//! let cfg = config::load_from_path(Path::new("banners.toml")).unwrap_or_default();
//! let queue = BannerQueue::with_config(cfg);
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Policy flags applied to a [`BannerQueue`](crate::BannerQueue) at
/// construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Start the queue in exclusive mode.
    #[serde(default)]
    pub exclusive: bool,
    /// Start the queue silenced.
    #[serde(default)]
    pub silenced: bool,
}

/// Loads a queue configuration from a TOML file at `path`.
pub fn load_from_path(path: &Path) -> Result<QueueConfig> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves a queue configuration as TOML to `path`.
///
/// Parent directories are created if missing.
pub fn save_to_path(config: &QueueConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
