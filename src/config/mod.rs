use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

use crate::models::credential::AdminCredential;
use crate::{LivechatError, Result};

/// What the status aggregator does when one agent's lookup fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFailurePolicy {
    /// Abort the whole interaction on the first failed lookup
    #[default]
    FailFast,
    /// Render the agent with an "unknown" status and keep going
    Placeholder,
}

/// Listener address for the host-facing server
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BasicSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for BasicSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Admin identity used against the chat server.
///
/// Either the personal access token pair (`user_id` + `token`) or the
/// login pair (`username` + `password`) must be filled in.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AdminSettings {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl AdminSettings {
    /// Pick the credential kind from whichever fields are set.
    /// A token wins over a login pair.
    pub fn credential(&self) -> Result<AdminCredential> {
        if !self.token.trim().is_empty() {
            if self.user_id.trim().is_empty() {
                return Err(LivechatError::Configuration(
                    "admin.user_id is required when admin.token is set".to_string(),
                ));
            }
            return Ok(AdminCredential::StaticToken {
                user_id: self.user_id.clone(),
                token: self.token.clone(),
            });
        }

        match (self.username.trim().is_empty(), self.password.is_empty()) {
            (false, false) => Ok(AdminCredential::LoginPair {
                username: self.username.clone(),
                password: self.password.clone(),
            }),
            (false, true) => Err(LivechatError::Configuration(
                "admin.password is required when admin.username is set".to_string(),
            )),
            _ => Err(LivechatError::Configuration(
                "admin credentials not configured: set admin.user_id + admin.token or admin.username + admin.password"
                    .to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApplicationSettings {
    /// Base URL of the chat server (ROOT_URL)
    #[serde(default)]
    pub server_url: String,
    /// Selected department id
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub admin: AdminSettings,
    /// Per-call timeout for chat server requests (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub status_failure: StatusFailurePolicy,
    /// Bearer token the host must present; empty disables the check
    #[serde(default)]
    pub host_token: String,
}

fn default_timeout() -> u64 {
    10
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            department: String::new(),
            admin: AdminSettings::default(),
            timeout_secs: default_timeout(),
            status_failure: StatusFailurePolicy::default(),
            host_token: String::new(),
        }
    }
}

impl ApplicationSettings {
    /// Selected department id, rejected when empty
    pub fn department_id(&self) -> Result<&str> {
        let department = self.department.trim();
        if department.is_empty() {
            return Err(LivechatError::Configuration(
                "department not configured".to_string(),
            ));
        }
        Ok(department)
    }

    pub fn credential(&self) -> Result<AdminCredential> {
        self.admin.credential()
    }

    /// Parsed chat server base URL
    pub fn server_url(&self) -> Result<url::Url> {
        let raw = self.server_url.trim();
        if raw.is_empty() {
            return Err(LivechatError::Configuration(
                "server_url not configured".to_string(),
            ));
        }
        let parsed = url::Url::parse(raw)
            .map_err(|e| LivechatError::Configuration(format!("invalid server_url: {}", e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(LivechatError::Configuration(format!(
                "server_url scheme \"{}\" is not supported",
                scheme
            ))),
        }
    }

    pub fn host_token(&self) -> Option<&str> {
        let token = self.host_token.trim();
        (!token.is_empty()).then_some(token)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub basic: BasicSettings,
    #[serde(default)]
    pub application: ApplicationSettings,
}

impl Settings {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with defaults
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add local configuration file (not tracked by git)
            .add_source(File::with_name("config/local").required(false))
            // Add in settings from environment variables (LIVECHAT__APPLICATION__DEPARTMENT=...)
            .add_source(Environment::with_prefix("LIVECHAT").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.basic.host, self.basic.port)
    }
}
