use std::fmt;
use std::time::Duration;

use log::trace;

use crate::{Error, Result};

pub const API_KEY_VAR: &str = "ELEVENLABS_API_KEY";
pub const BASE_URL_VAR: &str = "ELEVENLABS_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
/// Same default the vendor SDK ships with. Voice design regularly takes
/// longer than reqwest's own 30 second default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(240);

#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    /// Scheme and host only, e.g. `https://api.elevenlabs.io`.
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the configuration from the process environment, after seeding it
    /// from a `.env` file in the working directory when one exists.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => trace!("loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(Error::InvalidConfig(e.to_string())),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration against any key lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use voice_design_rs::config::ClientConfig;
    ///
    /// let config = ClientConfig::from_lookup(|key| match key {
    ///     "ELEVENLABS_API_KEY" => Some("sk_test".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.base_url, "https://api.elevenlabs.io");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|url| !url.is_empty()) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
