use std::env;

use url::Url;

use crate::error::{Error, Result};

pub const API_KEY_VAR: &str = "TVLY_API_KEY";
pub const API_URL_VAR: &str = "TVLY_API_URL";
pub const DEFAULT_API_URL: &str = "https://api.tavily.com/search";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: Url,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "Error: {API_KEY_VAR} environment variable is not set\n\
                     Please set it before running: export {API_KEY_VAR}=your_key"
                ))
            })?;

        let raw_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let endpoint = Url::parse(raw_url.trim()).map_err(|err| {
            Error::Configuration(format!("Error: invalid {API_URL_VAR} '{raw_url}': {err}"))
        })?;

        Ok(Self { api_key, endpoint })
    }
}
