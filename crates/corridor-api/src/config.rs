//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Root holding `images/` and `sounds/`.
    pub asset_dir: PathBuf,
    /// Multiplier on cinematic hold times. `0` makes every cue instant.
    pub cue_time_scale: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 3000,
            asset_dir: PathBuf::from("assets"),
            cue_time_scale: 1.0,
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `ASSET_DIR` and `CUE_TIME_SCALE`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        }
        if let Some(dir) = lookup("ASSET_DIR") {
            config.asset_dir = PathBuf::from(dir);
        }
        if let Some(scale) = lookup("CUE_TIME_SCALE") {
            let scale: f64 = scale
                .parse()
                .map_err(|e| AppError::Config(format!("CUE_TIME_SCALE must be a number: {e}")))?;
            if !scale.is_finite() || scale < 0.0 {
                return Err(AppError::Config(format!(
                    "CUE_TIME_SCALE must be zero or positive, got {scale}"
                )));
            }
            config.cue_time_scale = scale;
        }

        Ok(config)
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
