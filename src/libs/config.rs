//! Configuration management for dremota.
//!
//! Settings live in a JSON file in the platform-specific data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\dremota\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/dremota/config.json`
//! - **Linux**: `~/.local/share/lacodda/dremota/config.json`
//!
//! Every section is optional. A missing file or section means defaults, so
//! the application works with no setup at all.
//!
//! ```rust,no_run
//! use dremota::libs::config::Config;
//!
//! let config = Config::read()?;
//! let window = config.prediction.unwrap_or_default();
//! assert!(window.contains_hour(18));
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// When the night bedtime prediction is shown.
///
/// The prediction is only meaningful in the evening, once most of the day's
/// naps and wakefulness are known. Both bounds are inclusive hours of the
/// local day; a start later than the end wraps past midnight, so 22 to 1
/// covers 22:00 through 01:59.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PredictionConfig {
    /// First hour (0–23) in which a prediction is shown.
    pub window_start_hour: u32,
    /// Last hour (0–23) in which a prediction is shown.
    pub window_end_hour: u32,
}

/// Live wakefulness counter settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WatchConfig {
    /// Seconds between counter refreshes.
    pub tick_interval: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PredictionConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<WatchConfig>,
}

impl Default for PredictionConfig {
    /// 17:00 through 20:59.
    fn default() -> Self {
        PredictionConfig {
            window_start_hour: 17,
            window_end_hour: 20,
        }
    }
}

impl PredictionConfig {
    pub fn contains_hour(&self, hour: u32) -> bool {
        if self.window_start_hour <= self.window_end_hour {
            (self.window_start_hour..=self.window_end_hour).contains(&hour)
        } else {
            hour >= self.window_start_hour || hour <= self.window_end_hour
        }
    }
}

impl Default for WatchConfig {
    /// One refresh per minute.
    fn default() -> Self {
        WatchConfig { tick_interval: 60 }
    }
}

impl Config {
    /// Reads the configuration file, or returns defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Fills every missing section with its defaults, keeping set values.
    pub fn with_defaults(self) -> Self {
        Config {
            prediction: Some(self.prediction.unwrap_or_default()),
            watch: Some(self.watch.unwrap_or_default()),
        }
    }
}
