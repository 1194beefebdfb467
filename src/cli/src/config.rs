use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use color_eyre::eyre::WrapErr;
use facelet_core::DEFAULT_SCRAMBLE_LENGTH;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Settings read from the TOML configuration file. Every field is optional in
/// the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaceletConfig {
    /// How many random moves a scramble has
    pub scramble_length: usize,
    /// Pause between moves when playing back a sequence
    pub playback_delay_ms: u64,
    /// Print sticker letters instead of colored cells
    pub plain: bool,
}

impl Default for FaceletConfig {
    fn default() -> Self {
        FaceletConfig {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            playback_delay_ms: 400,
            plain: false,
        }
    }
}

impl FaceletConfig {
    /// `<config dir>/facelet/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("facelet").join("config.toml"))
    }

    /// Load the configuration. An explicit `path` must exist; the default path
    /// is only read if it does.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<FaceletConfig> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    debug!(target: "config", "No configuration file, using defaults");
                    return Ok(FaceletConfig::default());
                }
            },
        };

        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = toml::from_str::<FaceletConfig>(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))?;
        info!(target: "config", "Loaded {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn playback_delay(&self) -> Duration {
        Duration::from_millis(self.playback_delay_ms)
    }
}
