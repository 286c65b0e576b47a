//! Configuration for the HTTP executor

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::AuthMethod;
use crate::error::{RestClientError, RestClientResult};

pub const DEFAULT_BASE_URL: &str = "https://taskrouter.twilio.com/v1/";

pub const ACCOUNT_SID_ENV: &str = "TWILIO_ACCOUNT_SID";
pub const AUTH_TOKEN_ENV: &str = "TWILIO_AUTH_TOKEN";
pub const BASE_URL_ENV: &str = "TASKROUTER_BASE_URL";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("taskrouter-rest-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Credentials and endpoint settings of a TaskRouter account
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub account_sid: String,
    pub auth_token: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> RestClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> RestClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_sid = lookup(ACCOUNT_SID_ENV)
            .filter(|v| !v.is_empty())
            .ok_or(RestClientError::MissingConfig(ACCOUNT_SID_ENV))?;
        let auth_token = lookup(AUTH_TOKEN_ENV)
            .filter(|v| !v.is_empty())
            .ok_or(RestClientError::MissingConfig(AUTH_TOKEN_ENV))?;

        let mut config = Self::new(account_sid, auth_token);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Basic authentication with the account SID and auth token
    pub fn auth(&self) -> AuthMethod {
        AuthMethod::basic(&self.account_sid, &self.auth_token)
    }
}
