//! REST client for the chat server.
//!
//! Every method performs exactly one HTTP call. Failures of the login call are
//! reported as authentication errors, everything else as upstream errors.

pub mod wire;

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ApplicationSettings;
use crate::models::{AuthHeaders, Department};
use crate::{LivechatError, Result};

use self::wire::{
    CloseRoomRequest, DepartmentAgentsResponse, DepartmentResponse, DepartmentsResponse,
    LoginRequest, LoginResponse, OutgoingMessage, SendMessageRequest, UserInfoResponse,
};

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ChatClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LivechatError::Configuration(format!("http client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn from_settings(settings: &ApplicationSettings) -> Result<Self> {
        Self::new(
            settings.server_url()?,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    /// Underlying HTTP client, shared with callers that fetch arbitrary URLs
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL under the base URL, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| {
                LivechatError::Configuration(format!("server_url {} cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authed(&self, request: RequestBuilder, headers: &AuthHeaders) -> Result<RequestBuilder> {
        let map = headers
            .to_header_map()
            .map_err(|e| LivechatError::Configuration(format!("invalid auth header: {}", e)))?;
        Ok(request.headers(map))
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// POST /api/v1/login - exchange a username/password for a session token
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthHeaders> {
        let url = self.endpoint(&["api", "v1", "login"])?;
        debug!(username = %username, "logging in to chat server");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&LoginRequest {
                user: username,
                password,
            })
            .send()
            .await
            .map_err(|e| LivechatError::Authentication(describe("login", &e)))?;

        if !resp.status().is_success() {
            return Err(LivechatError::Authentication(format!(
                "login failed: {}",
                resp.status()
            )));
        }

        let body: LoginResponse = resp
            .json()
            .await
            .map_err(|e| LivechatError::Authentication(format!("login response: {}", e)))?;

        Ok(AuthHeaders::new(body.data.auth_token, body.data.user_id))
    }

    // ========================================================================
    // Livechat departments
    // ========================================================================

    /// GET /api/v1/livechat/department/{id}/agents - usernames in response order
    pub async fn department_agents(
        &self,
        headers: &AuthHeaders,
        department_id: &str,
    ) -> Result<Vec<String>> {
        let url = self.endpoint(&["api", "v1", "livechat", "department", department_id, "agents"])?;
        debug!(department = %department_id, "listing department agents");

        let resp = self.send(self.authed(self.http.get(url), headers)?, "list agents").await?;
        let body: DepartmentAgentsResponse = decode(resp, "list agents").await?;

        Ok(body.agents.into_iter().map(|agent| agent.username).collect())
    }

    /// GET /api/v1/livechat/department/{id} - `None` when the server knows no such department
    pub async fn department(
        &self,
        headers: &AuthHeaders,
        department_id: &str,
    ) -> Result<Option<Department>> {
        let url = self.endpoint(&["api", "v1", "livechat", "department", department_id])?;

        let resp = self.send(self.authed(self.http.get(url), headers)?, "department info").await?;
        let body: DepartmentResponse = decode(resp, "department info").await?;

        Ok(body.department.map(Department::from))
    }

    /// GET /api/v1/livechat/department - every department visible to the admin
    pub async fn departments(&self, headers: &AuthHeaders) -> Result<Vec<Department>> {
        let url = self.endpoint(&["api", "v1", "livechat", "department"])?;

        let resp = self.send(self.authed(self.http.get(url), headers)?, "list departments").await?;
        let body: DepartmentsResponse = decode(resp, "list departments").await?;

        Ok(body.departments.into_iter().map(Department::from).collect())
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// GET /api/v1/users.info?username={username} - presence status of a user
    pub async fn user_status(&self, headers: &AuthHeaders, username: &str) -> Result<String> {
        let url = self.endpoint(&["api", "v1", "users.info"])?;
        debug!(username = %username, "fetching user status");

        let request = self.http.get(url).query(&[("username", username)]);
        let resp = self.send(self.authed(request, headers)?, "user info").await?;
        let body: UserInfoResponse = decode(resp, "user info").await?;

        Ok(body.user.status)
    }

    // ========================================================================
    // Rooms
    // ========================================================================

    /// POST /api/v1/chat.sendMessage - post a message into a room as the admin
    pub async fn send_message(&self, headers: &AuthHeaders, room_id: &str, text: &str) -> Result<()> {
        let url = self.endpoint(&["api", "v1", "chat.sendMessage"])?;
        debug!(room_id = %room_id, "sending message");

        let request = self.http.post(url).json(&SendMessageRequest {
            message: OutgoingMessage {
                rid: room_id,
                msg: text,
            },
        });
        self.send(self.authed(request, headers)?, "send message").await?;
        Ok(())
    }

    /// POST /api/v1/livechat/room.closeByUser - close a livechat room
    pub async fn close_room(&self, headers: &AuthHeaders, room_id: &str, comment: &str) -> Result<()> {
        let url = self.endpoint(&["api", "v1", "livechat", "room.closeByUser"])?;
        debug!(room_id = %room_id, "closing room");

        let request = self.http.post(url).json(&CloseRoomRequest {
            rid: room_id,
            comment,
        });
        self.send(self.authed(request, headers)?, "close room").await?;
        Ok(())
    }

    /// Send a request and reject transport failures and non-2xx statuses
    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        let resp = request
            .send()
            .await
            .map_err(|e| LivechatError::Upstream(describe(what, &e)))?;

        if !resp.status().is_success() {
            return Err(LivechatError::Upstream(format!(
                "{} failed: {}",
                what,
                resp.status()
            )));
        }

        Ok(resp)
    }
}

async fn decode<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T> {
    resp.json()
        .await
        .map_err(|e| LivechatError::Upstream(format!("{} response: {}", what, e)))
}

fn describe(what: &str, error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("{} timed out", what)
    } else {
        format!("{} request failed: {}", what, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ChatClient {
        ChatClient::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn endpoint_appends_to_root() {
        let url = client("https://chat.example.com").endpoint(&["api", "v1", "login"]).unwrap();
        assert_eq!(url.as_str(), "https://chat.example.com/api/v1/login");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let url = client("https://example.com/chat/")
            .endpoint(&["api", "v1", "users.info"])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/chat/api/v1/users.info");
    }

    #[test]
    fn endpoint_encodes_department_id() {
        let url = client("https://chat.example.com")
            .endpoint(&["api", "v1", "livechat", "department", "a/b c", "agents"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://chat.example.com/api/v1/livechat/department/a%2Fb%20c/agents"
        );
    }
}
