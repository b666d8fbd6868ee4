//! Configuration management for the vigil application.
//!
//! Settings live in a JSON file inside the platform application-data
//! directory. Every module is optional: a missing file or a missing section
//! falls back to documented defaults, so the tool runs usefully with zero
//! setup. The command line deliberately stays minimal (`--debug` only); all
//! tuning happens here.
//!
//! ## Configuration Structure
//!
//! - **Engine**: interaction interval and the consecutive-failure threshold
//!   that triggers shutdown.
//! - **Automation**: which application receives the presence keystroke, and
//!   which applications are trusted to issue the pause shortcut.
//!
//! ## Storage
//!
//! The file location follows OS conventions:
//! - **Windows**: `%LOCALAPPDATA%\vigil\config.json`
//! - **macOS**: `~/Library/Application Support/vigil/config.json`
//! - **Linux**: `~/.local/share/vigil/config.json`

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Activity engine configuration settings.
///
/// Timing and failure-tolerance parameters for the simulation loop. The
/// interval is the quiet period between interaction attempts; the failure
/// threshold bounds how many consecutive broken attempts are tolerated
/// before the engine gives up and shuts down.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Seconds between interaction attempts. Must be at least 1.
    pub interval: u64,

    /// Consecutive interaction failures tolerated before shutdown.
    ///
    /// A single failed attempt is recovered from (and announced); this many
    /// in a row is treated as a broken environment and stops the run.
    pub max_failures: u32,
}

/// Platform automation configuration settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AutomationConfig {
    /// The application that receives the presence-signaling keystroke.
    pub target_app: String,

    /// Applications trusted to issue the pause shortcut.
    ///
    /// The global shortcut fires regardless of which window has focus, so a
    /// toggle is only honored while the frontmost application name matches
    /// one of these entries (case-insensitive substring). An empty list
    /// disables the gate entirely.
    pub pause_apps: Vec<String>,
}

/// Main configuration container for the application.
///
/// Each section is optional so unconfigured installs serialize to a clean,
/// minimal file and new sections can appear without breaking existing setups.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Activity engine timing and failure tolerance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineConfig>,

    /// Platform automation targets and the pause-shortcut allow-list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation: Option<AutomationConfig>,
}

impl Default for EngineConfig {
    /// Default values:
    /// - 240 seconds between interaction attempts (comfortably inside the
    ///   usual five-minute away timeout)
    /// - 3 consecutive failures before shutdown
    fn default() -> Self {
        EngineConfig {
            interval: 240,
            max_failures: 3,
        }
    }
}

impl Default for AutomationConfig {
    fn default() -> Self {
        AutomationConfig {
            target_app: "Microsoft Teams".to_string(),
            pause_apps: vec![
                "Terminal".to_string(),
                "iTerm2".to_string(),
                "Alacritty".to_string(),
                "kitty".to_string(),
                "WezTerm".to_string(),
                "Warp".to_string(),
            ],
        }
    }
}

impl EngineConfig {
    /// Validates the run preconditions.
    ///
    /// A zero interval would busy-loop the actuator and a zero threshold
    /// would shut the engine down before its first attempt, so both are
    /// rejected before any side effect happens.
    pub fn validate(&self) -> Result<()> {
        if self.interval == 0 {
            msg_bail_anyhow!(Message::InvalidInterval);
        }
        if self.max_failures == 0 {
            msg_bail_anyhow!(Message::InvalidMaxFailures);
        }
        Ok(())
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default configuration when no file exists; a file that
    /// exists but cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }
}
