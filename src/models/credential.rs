use std::fmt;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};

pub const AUTH_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-auth-token");
pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");

// ============================================================================
// Admin Credential
// ============================================================================

/// Means to authenticate against the chat server.
///
/// Read from settings once per interaction and never persisted.
#[derive(Clone, PartialEq, Eq)]
pub enum AdminCredential {
    /// Personal access token issued to an admin user
    StaticToken { user_id: String, token: String },
    /// Username/password exchanged for a session token on every use
    LoginPair { username: String, password: String },
}

impl AdminCredential {
    pub fn kind(&self) -> &'static str {
        match self {
            AdminCredential::StaticToken { .. } => "static-token",
            AdminCredential::LoginPair { .. } => "login-pair",
        }
    }
}

impl fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminCredential::StaticToken { user_id, .. } => f
                .debug_struct("StaticToken")
                .field("user_id", user_id)
                .field("token", &"<redacted>")
                .finish(),
            AdminCredential::LoginPair { username, .. } => f
                .debug_struct("LoginPair")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

// ============================================================================
// Auth Headers
// ============================================================================

/// Headers for authenticated chat server calls
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub auth_token: String,
    pub user_id: String,
}

impl AuthHeaders {
    pub fn new(auth_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            user_id: user_id.into(),
        }
    }

    /// Content-Type, X-Auth-Token and X-User-Id as a header map
    pub fn to_header_map(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut token = HeaderValue::from_str(&self.auth_token)?;
        token.set_sensitive(true);
        headers.insert(AUTH_TOKEN_HEADER, token);
        headers.insert(USER_ID_HEADER, HeaderValue::from_str(&self.user_id)?);
        Ok(headers)
    }
}

impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("user_id", &self.user_id)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_map_carries_all_three_headers() {
        let headers = AuthHeaders::new("T", "U").to_header_map().unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[AUTH_TOKEN_HEADER], "T");
        assert_eq!(headers[USER_ID_HEADER], "U");
        assert_eq!(headers["X-Auth-Token"], "T");
        assert!(headers[AUTH_TOKEN_HEADER].is_sensitive());
    }

    #[test]
    fn header_map_rejects_control_characters() {
        assert!(AuthHeaders::new("bad\ntoken", "U").to_header_map().is_err());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let credential = AdminCredential::LoginPair {
            username: "admin".into(),
            password: "hunter2".into(),
        };
        let rendered = format!("{:?} {:?}", credential, AuthHeaders::new("secret-token", "U"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("admin"));
    }
}
