use crate::error::RollError;
use crate::qr::{DEFAULT_QR_PERIOD_SECS, QrRotation};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "ROLL_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = ".rollcall/config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowDefaults {
    pub on_time_minutes: i64,
    pub late_minutes: i64,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            on_time_minutes: 15,
            late_minutes: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QrSettings {
    pub period_secs: u32,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            period_secs: DEFAULT_QR_PERIOD_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RollConfig {
    pub window: WindowDefaults,
    pub qr: QrSettings,
}

impl RollConfig {
    /// `--config` wins, then `ROLL_CONFIG`, then the default location.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Loads the file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, RollError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, RollError> {
        let config: RollConfig = toml::from_str(content).map_err(|err| RollError::Config {
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), RollError> {
        if self.qr.period_secs == 0 {
            return Err(RollError::Config {
                message: "qr.period_secs must be positive".to_string(),
            });
        }
        if self.window.on_time_minutes < 0 || self.window.late_minutes < 0 {
            return Err(RollError::Config {
                message: "window durations must not be negative".to_string(),
            });
        }
        Ok(())
    }

    pub fn qr_rotation(&self) -> QrRotation {
        QrRotation::new(self.qr.period_secs).unwrap_or_default()
    }
}
