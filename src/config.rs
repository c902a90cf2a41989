//! Environment configuration.
//!
//! The shell supplies a persistence endpoint/key pair and, optionally, a map
//! style identifier. Presence is required; values are trusted as-is.

use std::env;
use std::fmt;

pub const ENV_STORE_URL: &str = "SUPABASE_URL";
pub const ENV_STORE_KEY: &str = "SUPABASE_ANON_KEY";
pub const ENV_TABLE: &str = "COORDINATES_TABLE";
pub const ENV_MAP_STYLE: &str = "MAPS_MAP_ID";

const DEFAULT_TABLE: &str = "coordinates";

/// Where submissions go.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub api_key: String,
    pub table: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: require(ENV_STORE_URL)?,
            api_key: require(ENV_STORE_KEY)?,
            table: env::var(ENV_TABLE).unwrap_or_else(|_| DEFAULT_TABLE.into()),
        })
    }
}

/// Map style identifier, if the shell provides one.
pub fn map_style_id() -> Option<String> {
    env::var(ENV_MAP_STYLE).ok().filter(|v| !v.trim().is_empty())
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "Missing environment variable {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}
