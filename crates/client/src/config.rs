use std::time::Duration;

use crate::error::ClientError;

/// Base URL used when `FIELDOPS_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Per-request timeout used when `FIELDOPS_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Request helper configuration.
///
/// Defaults target a local backend. In deployed builds, override via
/// environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every resource path is appended to.
    pub base_url: String,
    /// Bearer token sent on every request when set.
    pub token: Option<String>,
    /// Whole-request timeout applied by the HTTP client.
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("fieldops-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the base URL, applying the same http(s) check as
    /// [`from_env`](Self::from_env).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        check_base_url(&base_url)?;
        self.base_url = base_url;
        Ok(self)
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `FIELDOPS_API_URL`      | `http://localhost:8080/api` |
    /// | `FIELDOPS_API_TOKEN`    | unset                       |
    /// | `FIELDOPS_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("FIELDOPS_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        check_base_url(&base_url)?;

        let token = lookup("FIELDOPS_API_TOKEN").filter(|s| !s.is_empty());

        let timeout_secs: u64 = match lookup("FIELDOPS_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Config(format!(
                    "FIELDOPS_TIMEOUT_SECS must be a valid u64, got '{raw}'"
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ClientError::Config(
                "FIELDOPS_TIMEOUT_SECS must be at least 1".into(),
            ));
        }

        let mut config = Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs));
        config.token = token;
        Ok(config)
    }
}

fn check_base_url(base_url: &str) -> Result<(), ClientError> {
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ClientError::Config(format!(
            "FIELDOPS_API_URL must be an http(s) URL, got '{base_url}'"
        )));
    }
    Ok(())
}
