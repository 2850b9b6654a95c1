use std::path::PathBuf;

use thiserror::Error;

pub const CONTENT_PATH_VAR: &str = "PORTFOLIO_CONTENT_PATH";
pub const SESSION_TOKEN_VAR: &str = "PORTFOLIO_SESSION_TOKEN";
pub const OWNER_VAR: &str = "PORTFOLIO_OWNER";

pub const DEFAULT_OWNER: &str = "Mazayu";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// Site settings read from the environment. Leptos' own options come from
/// `Cargo.toml` metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub content_path: Option<PathBuf>,
    pub session_token: Option<String>,
    pub owner: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            session_token: None,
            owner: DEFAULT_OWNER.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(key) {
                Some(v) if v.trim().is_empty() => Err(ConfigError::Empty(key)),
                Some(v) => Ok(Some(v.trim().to_string())),
                None => Ok(None),
            }
        };
        Ok(Self {
            content_path: read(CONTENT_PATH_VAR)?.map(PathBuf::from),
            session_token: read(SESSION_TOKEN_VAR)?,
            owner: read(OWNER_VAR)?.unwrap_or_else(|| DEFAULT_OWNER.to_string()),
        })
    }
}
