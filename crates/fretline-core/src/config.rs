//! Configuration loaded from the process environment.

use std::fmt;
use std::time::Duration;

use tracing::warn;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Settings for the outbound chat-completion provider.
#[derive(Clone)]
pub struct ProviderSettings {
    pub api_key: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// API base without a trailing slash (e.g. `https://api.openai.com/v1`).
    pub base_url: String,
    pub timeout: Duration,
}

impl ProviderSettings {
    /// API key with everything but the last four characters hidden.
    pub fn masked_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "****".into();
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{}", tail)
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.masked_key())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Top-level relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// HTTP server port.
    pub port: u16,
    pub provider: ProviderSettings,
}

impl RelayConfig {
    /// Create configuration from the process environment.
    ///
    /// Fails when `OPENAI_API_KEY` is missing or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set in the environment", API_KEY_VAR)))?;

        let port = parse_or_default(&lookup, "PORT", DEFAULT_PORT);

        let model = lookup("OPENAI_MODEL")
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.into());

        let base_url = lookup("OPENAI_BASE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let timeout_secs = match parse_or_default(&lookup, "OPENAI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS) {
            0 => DEFAULT_TIMEOUT_SECS,
            secs => secs,
        };

        Ok(Self {
            port,
            provider: ProviderSettings {
                api_key,
                model,
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_or_default<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparsable {}={:?}", name, raw);
            default
        }),
        None => default,
    }
}
