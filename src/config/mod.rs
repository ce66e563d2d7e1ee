use crate::engine::Thresholds;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Max characters between a day-scope phrase and its time.
    pub scope_window: usize,
    /// Max characters between a "Day :" marker and its time.
    pub marker_window: usize,
    /// Max characters between a time and the day named before it.
    pub fallback_distance: usize,
    /// CSV column holding the record id.
    pub id_column: String,
    /// CSV column holding the free-text description.
    pub text_column: String,
    /// Extra override rules (YAML list), appended after the built-in ones.
    pub overrides_file: Option<String>,
    pub builtin_overrides: bool,
}

impl Default for Config {
    fn default() -> Self {
        let th = Thresholds::default();
        Self {
            scope_window: th.scope_window,
            marker_window: th.marker_window,
            fallback_distance: th.fallback_distance,
            id_column: "id".to_string(),
            text_column: "description".to_string(),
            overrides_file: None,
            builtin_overrides: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rhoraires")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rhoraires")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhoraires.conf")
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            scope_window: self.scope_window,
            marker_window: self.marker_window,
            fallback_distance: self.fallback_distance,
        }
    }

    /// Load configuration from `path`, or return defaults if the file is missing.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.scope_window == 0 || self.marker_window == 0 || self.fallback_distance == 0 {
            return Err(AppError::Config(
                "proximity thresholds must be greater than zero".into(),
            ));
        }
        if self.id_column.trim().is_empty() || self.text_column.trim().is_empty() {
            return Err(AppError::Config("column names must not be empty".into()));
        }
        Ok(())
    }

    /// Write `self` to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
