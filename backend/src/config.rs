//! Process configuration read from the environment at startup.

use log::{info, warn};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_DATABASE_URL: &str = "appstore.sqlite";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Error)]
#[error("invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite database path, or `:memory:`.
    pub database_url: String,
    pub admin_password: String,
    /// Require the `x-admin-password` header on admin routes.
    pub enforce_admin_auth: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_password = lookup("ADMIN_PASSWORD").unwrap_or_else(|| {
            warn!("ADMIN_PASSWORD not set, using the built-in default password");
            DEFAULT_ADMIN_PASSWORD.to_string()
        });

        Ok(Config {
            host: load(&lookup, "HOST", DEFAULT_HOST)?,
            port: load(&lookup, "PORT", DEFAULT_PORT)?,
            database_url: load(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL)?,
            admin_password,
            enforce_admin_auth: load(&lookup, "ENFORCE_ADMIN_AUTH", "false")?,
        })
    }
}

fn load<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError {
        key,
        reason: e.to_string(),
        value,
    })
}
