//! Game configuration. Loaded from `helicopter.ron` at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "helicopter.ron";

/// Startup settings. Every field is optional in the file; missing ones
/// take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Stage (and window) width in logical pixels.
    #[serde(default = "default_stage_width")]
    pub stage_width: f32,
    /// Stage (and window) height in logical pixels.
    #[serde(default = "default_stage_height")]
    pub stage_height: f32,
    /// Logic ticks per second.
    #[serde(default = "default_tps")]
    pub tps: f64,
    /// Bound of the platform → core channel.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Fixed seed for obstacle placement; entropy when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Entries kept on the high-score table.
    #[serde(default = "default_high_score_capacity")]
    pub high_score_capacity: usize,
    /// Where the high-score table is persisted.
    #[serde(default = "default_high_score_file")]
    pub high_score_file: PathBuf,
}

fn default_stage_width() -> f32 {
    1024.0
}
fn default_stage_height() -> f32 {
    600.0
}
fn default_tps() -> f64 {
    60.0
}
fn default_channel_capacity() -> usize {
    128
}
fn default_high_score_capacity() -> usize {
    10
}
fn default_high_score_file() -> PathBuf {
    PathBuf::from("highscores.ron")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stage_width: default_stage_width(),
            stage_height: default_stage_height(),
            tps: default_tps(),
            channel_capacity: default_channel_capacity(),
            rng_seed: None,
            high_score_capacity: default_high_score_capacity(),
            high_score_file: default_high_score_file(),
        }
    }
}

impl GameConfig {
    /// Load config from `helicopter.ron` in the working directory. If the
    /// file is missing or invalid, returns the default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: GameConfig = ron::from_str("(tps: 30.0, rng_seed: Some(7))").unwrap();

        assert_eq!(config.tps, 30.0);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.stage_width, 1024.0);
        assert_eq!(config.high_score_file, PathBuf::from("highscores.ron"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("helicopter-madness-no-such-config.ron");
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
    }

    #[test]
    fn invalid_file_gives_defaults() {
        let path = std::env::temp_dir()
            .join(format!("helicopter-madness-bad-config-{}.ron", std::process::id()));
        std::fs::write(&path, "(tps: \"fast\")").unwrap();

        let config = GameConfig::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(config, GameConfig::default());
    }
}
