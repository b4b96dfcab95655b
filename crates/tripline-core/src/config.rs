//! User settings read from `$XDG_CONFIG_HOME/tripline/config.toml`.
//!
//! Every key is optional. A missing file yields [`Settings::default`];
//! command-line flags are layered on top by the caller.
//!
//! ```toml
//! backend = "remote"
//! default_day = 2
//!
//! [remote]
//! url = "https://script.google.com/macros/s/.../exec"
//! timeout_secs = 20
//! ```

use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TripError},
    models::Day,
    store::remote::DEFAULT_TIMEOUT,
};

const APP_NAME: &str = "tripline";
const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "trip_plan.db";

/// Which record store holds the itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Local SQLite file
    #[default]
    Sqlite,
    /// Sheet-backed JSON API
    Remote,
}

impl FromStr for Backend {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "remote" => Ok(Backend::Remote),
            _ => Err(TripError::validation("backend")
                .with_reason(format!("expected 'sqlite' or 'remote', got '{s}'"))),
        }
    }
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteSettings {
    /// Endpoint receiving the JSON POST requests
    pub url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub backend: Backend,
    /// SQLite file; the XDG data directory is used when unset
    pub database_file: Option<PathBuf>,
    /// Day used by commands run without `--day`
    pub default_day: u8,
    pub remote: RemoteSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            database_file: None,
            default_day: Day::MIN,
            remote: RemoteSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the XDG config file when `None`.
    ///
    /// An explicit path must exist. The XDG file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Some(path) => path,
                None => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("Reading settings from {}", path.display());
        let content = std::fs::read_to_string(&path).map_err(|e| TripError::FileSystem {
            path: path.clone(),
            source: e,
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            TripError::Configuration { message } => TripError::Configuration {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })
    }

    /// Parse and check a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| TripError::configuration(e.to_string()))?;
        settings
            .default_day()
            .map_err(|e| TripError::configuration(e.to_string()))?;
        Ok(settings)
    }

    pub fn default_day(&self) -> Result<Day> {
        Day::new(self.default_day)
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote.timeout_secs)
    }

    /// Existing config file under the XDG config directories, if any.
    pub fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_NAME).find_config_file(CONFIG_FILE)
    }

    /// `$XDG_DATA_HOME/tripline/trip_plan.db`, creating the directory.
    pub fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_NAME)
            .place_data_file(DATABASE_FILE)
            .map_err(|e| TripError::XdgDirectory(e.to_string()))
    }
}
