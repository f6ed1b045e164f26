use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

mod error;

use crate::kakao_page::RetryPolicy;
pub use error::Error;

#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    /// Sent as `Referer` on every request; the upstream answers 403 without it.
    pub referer: String,
    pub timeout_secs: u64,
    pub screen_uid: u32,
    pub fetch_details: bool,
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://page.kakao.com/graphql".to_owned(),
            referer: "https://page.kakao.com".to_owned(),
            timeout_secs: 30,
            screen_uid: 51,
            fetch_details: false,
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|error| Error::Io {
            path: path.to_owned(),
            error,
        })?;
        Ok(Self::from_toml(&contents)?)
    }

    /// Reads the file named by `INGEST_CONFIG`, or falls back to the defaults.
    pub fn from_env() -> Result<Self, Error> {
        match std::env::var_os("INGEST_CONFIG") {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
