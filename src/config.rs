use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::cli::OutputArgs;
use crate::error::ConfigError;
use crate::snapshot::{LabelStyle, DEFAULT_PREVIEW_LEN, DEFAULT_TIME_FORMAT};

/// Settings from ~/.config/keepsake/config.toml (or the platform equivalent),
/// overridden by command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub preview_len: usize,
    pub time_format: String,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            preview_len: DEFAULT_PREVIEW_LEN,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "keepsake")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the user config. A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("could not determine config directory, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read { path: path.to_path_buf(), source });
            }
        };

        debug!("loading config from {}", path.display());
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies command line overrides on top of file settings.
    pub fn with_output_args(mut self, args: &OutputArgs) -> Result<Self, ConfigError> {
        if let Some(len) = args.preview_len {
            self.preview_len = len;
        }
        if let Some(format) = &args.time_format {
            self.time_format = format.clone();
        }
        self.json |= args.json;
        self.validate()?;
        Ok(self)
    }

    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            preview_len: self.preview_len,
            time_format: self.time_format.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimeFormat(self.time_format.clone()));
        }
        Ok(())
    }
}
