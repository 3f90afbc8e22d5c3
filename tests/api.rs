//! HTTP surface tests
//!
//! Drive the axum router directly with `oneshot`; the chat server is a
//! wiremock instance where a test needs one.

use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use livechat_agents::App;
use livechat_agents::api::{AppState, router};
use livechat_agents::client::ChatClient;
use livechat_agents::config::{AdminSettings, ApplicationSettings};

fn app_for(server_url: &str, host_token: &str) -> AppState {
    let settings = ApplicationSettings {
        server_url: server_url.to_string(),
        department: "sales".into(),
        admin: AdminSettings {
            user_id: "U".into(),
            token: "T".into(),
            ..Default::default()
        },
        host_token: host_token.to_string(),
        ..Default::default()
    };
    let client = ChatClient::new(server_url.parse().unwrap(), Duration::from_secs(5)).unwrap();
    AppState::new(App::new(client, settings))
}

fn offline_app(host_token: &str) -> AppState {
    app_for("http://127.0.0.1:9", host_token)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let response = router(offline_app(""))
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_host_routes_require_token_when_configured() {
    let event = json!({"type": "viewClosed", "actionId": ""});

    let response = router(offline_app("host-secret"))
        .oneshot(post_json("/api/interactions", event.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let mut request = post_json("/api/interactions", event);
    request.headers_mut().insert(
        header::AUTHORIZATION,
        "Bearer host-secret".parse().unwrap(),
    );
    let response = router(offline_app("host-secret"))
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"success": true}));
}

#[tokio::test]
async fn test_echo_is_public() {
    let response = router(offline_app("host-secret"))
        .oneshot(post_json("/api/echo?greeting=hi", json!({"ping": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/api/echo");
    assert_eq!(body["query"]["greeting"], "hi");
    assert_eq!(body["body"], json!({"ping": 1}));
}

#[tokio::test]
async fn test_hello_command_over_http() {
    let request = post_json(
        "/api/commands/hello",
        json!({
            "args": ["text"],
            "sender": {"id": "u1", "username": "alice"},
            "room": {"id": "R1"}
        }),
    );
    let response = router(offline_app("")).oneshot(request).await.unwrap();

    assert_eq!(
        json_body(response).await,
        json!({"kind": "message", "roomId": "R1", "text": "Texting!"})
    );
}

#[tokio::test]
async fn test_message_hooks_over_http() {
    let message = json!({
        "sender": {"id": "u1", "username": "alice"},
        "room": {"id": "R1", "slug": "support", "displayName": "Support"},
        "text": "a test message"
    });

    let response = router(offline_app(""))
        .oneshot(post_json("/api/hooks/pre-message", message.clone()))
        .await
        .unwrap();
    assert_eq!(json_body(response).await, json!({"prevent": true}));

    let response = router(offline_app(""))
        .oneshot(post_json("/api/hooks/post-message", message))
        .await
        .unwrap();
    assert_eq!(
        json_body(response).await,
        json!({"relay": {"roomName": "general", "text": "@alice said \"a test message\" in #Support"}})
    );
}

#[tokio::test]
async fn test_agents_report_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/livechat/department/sales/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "agents": [{"username": "alice"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users.info"))
        .and(query_param("username", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"status": "online"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/livechat/department/sales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "department": {"_id": "sales", "name": "Sales"}
        })))
        .mount(&server)
        .await;

    let response = router(app_for(&server.uri(), ""))
        .oneshot(Request::builder().uri("/api/agents").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["title"], "Agents of selected department: Sales");
    assert_eq!(body["lines"], json!(["alice (online)"]));
}

#[tokio::test]
async fn test_agents_report_surfaces_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/livechat/department/sales/agents"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let response = router(app_for(&server.uri(), ""))
        .oneshot(Request::builder().uri("/api/agents").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Upstream error"));
}

#[tokio::test]
async fn test_manifest_lists_selectable_departments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/livechat/department"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "departments": [
                {"_id": "sales", "name": "Sales", "enabled": true, "numAgents": 2},
                {"_id": "empty", "name": "Empty", "enabled": true, "numAgents": 0},
                {"_id": "off", "name": "Off", "enabled": false, "numAgents": 3}
            ]
        })))
        .mount(&server)
        .await;

    let response = router(app_for(&server.uri(), ""))
        .oneshot(Request::builder().uri("/api/app").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["buttons"][0]["actionId"], "livechat-agents-action");
    assert_eq!(
        body["settings"][0]["values"],
        json!([{"key": "sales", "i18nLabel": "Sales"}])
    );
}
