//! Runtime settings resolved from command-line overrides, the environment and
//! platform defaults, in that order of precedence.

use crate::config::JsonFileStore;
use crate::error::{AppError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_APP_NAME: &str = "speckyboy-scraper";
pub const DEFAULT_AUTHOR: &str = "Alex Lee";

pub const CONFIG_DIR_VAR: &str = "SPECKYBOY_CONFIG_DIR";
pub const LOG_DIR_VAR: &str = "SPECKYBOY_LOG_DIR";

/// Settings for one run of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Shown in the title banner and used to name the config file.
    pub app_name: String,
    /// Credited in the About panel.
    pub author: String,
    /// Root under which the `configstore/` directory lives.
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolves settings. Call `dotenv::dotenv()` beforehand to pick up a `.env` file.
    pub fn load(config_dir: Option<PathBuf>, log_dir: Option<PathBuf>) -> Result<Self> {
        let app_name = DEFAULT_APP_NAME.to_string();

        let config_dir = config_dir
            .or_else(|| env_path(CONFIG_DIR_VAR))
            .or_else(dirs::config_dir)
            .ok_or_else(|| {
                AppError::Config(format!(
                    "no config directory found; set {} or pass --config-dir",
                    CONFIG_DIR_VAR
                ))
            })?;

        let log_dir = log_dir
            .or_else(|| env_path(LOG_DIR_VAR))
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(&app_name).join("logs")))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "no log directory found; set {} or pass --log-dir",
                    LOG_DIR_VAR
                ))
            })?;

        debug!(
            "Resolved config dir {} and log dir {}",
            config_dir.display(),
            log_dir.display()
        );

        Ok(Self {
            app_name,
            author: DEFAULT_AUTHOR.to_string(),
            config_dir,
            log_dir,
        })
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::for_app(&self.config_dir, &self.app_name)
    }

    pub fn store_path(&self) -> PathBuf {
        self.store().path().to_path_buf()
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
