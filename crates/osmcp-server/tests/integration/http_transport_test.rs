//! HTTP transport end-to-end tests
//!
//! Drives the full dispatch path through Rocket's local client: POST
//! dispatch, session creation and termination, and the health endpoint,
//! all against a mock backend.

use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::Client;
use std::sync::Arc;

use osmcp_server::McpServerBuilder;
use osmcp_server::constants::{
    JSONRPC_INVALID_PARAMS, JSONRPC_METHOD_NOT_FOUND, JSONRPC_PARSE_ERROR,
    JSONRPC_SESSION_NOT_FOUND, SESSION_HEADER,
};
use osmcp_server::transport::http::{HttpTransport, HttpTransportConfig};

use crate::test_utils::mock_backend::MockBackend;

/// Build a local client over a transport backed by the given mock
async fn client_with(backend: MockBackend) -> Client {
    let server = McpServerBuilder::new()
        .with_backend(Arc::new(backend))
        .try_build()
        .expect("server builds");
    let transport = HttpTransport::new(HttpTransportConfig::localhost(0), Arc::new(server));
    Client::tracked(transport.rocket())
        .await
        .expect("valid rocket instance")
}

/// POST a JSON-RPC body, returning the session response header and parsed body
async fn post_json(
    client: &Client,
    body: serde_json::Value,
    session: Option<&str>,
) -> (Option<String>, serde_json::Value) {
    let mut request = client
        .post("/mcp")
        .header(ContentType::JSON)
        .body(body.to_string());
    if let Some(id) = session {
        request = request.header(Header::new(SESSION_HEADER, id.to_string()));
    }

    let response = request.dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let session_header = response
        .headers()
        .get_one(SESSION_HEADER)
        .map(str::to_string);
    let body = response.into_string().await.expect("response body");
    (session_header, serde_json::from_str(&body).expect("json body"))
}

fn initialize_request() -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "method": "initialize",
        "params": {},
        "id": 1
    })
}

fn tool_call(name: &str, arguments: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments },
        "id": 2
    })
}

#[rocket::async_test]
async fn test_health_endpoint() {
    let client = client_with(MockBackend::healthy()).await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "osmcp");
    assert!(json["version"].is_string());
}

#[rocket::async_test]
async fn test_initialize_creates_session_and_echoes_id() {
    let client = client_with(MockBackend::healthy()).await;

    let (header, body) = post_json(&client, initialize_request(), None).await;

    let header = header.expect("session header present");
    assert_eq!(body["result"]["sessionId"], header.as_str());
    assert_eq!(body["result"]["serverInfo"]["name"], "OpenSearch MCP Server");
    assert!(body["result"]["protocolVersion"].is_string());
}

#[rocket::async_test]
async fn test_consecutive_initializations_yield_distinct_sessions() {
    let client = client_with(MockBackend::healthy()).await;

    let (first, _) = post_json(&client, initialize_request(), None).await;
    let (second, _) = post_json(&client, initialize_request(), None).await;

    assert_ne!(first.expect("first id"), second.expect("second id"));
}

#[rocket::async_test]
async fn test_initialize_with_existing_session_creates_nothing() {
    let client = client_with(MockBackend::healthy()).await;

    let (header, _) = post_json(&client, initialize_request(), None).await;
    let id = header.expect("session id");

    let (reheader, body) = post_json(&client, initialize_request(), Some(&id)).await;
    assert!(reheader.is_none());
    assert!(body["result"]["sessionId"].is_null());
}

#[rocket::async_test]
async fn test_tools_list_contains_all_tools() {
    let client = client_with(MockBackend::healthy()).await;

    let request = serde_json::json!({
        "jsonrpc": "2.0",
        "method": "tools/list",
        "id": 1
    });
    let (_, body) = post_json(&client, request, None).await;

    let tools = body["result"]["tools"].as_array().expect("tools array");
    assert_eq!(tools.len(), 6);
    assert!(tools.iter().any(|t| t["name"] == "search_documents"));
}

#[rocket::async_test]
async fn test_session_scoped_tool_call_succeeds() {
    let client = client_with(MockBackend::healthy()).await;

    let (header, _) = post_json(&client, initialize_request(), None).await;
    let id = header.expect("session id");

    let (_, body) = post_json(
        &client,
        tool_call("get_cluster_health", serde_json::json!({})),
        Some(&id),
    )
    .await;

    assert_eq!(body["result"]["isError"], false);
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("green"));
}

#[rocket::async_test]
async fn test_list_indices_end_to_end() {
    let client = client_with(MockBackend::healthy()).await;

    let (_, body) = post_json(&client, tool_call("list_indices", serde_json::json!({})), None).await;

    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("\"a\""));
    assert!(text.contains("\"b\""));
}

#[rocket::async_test]
async fn test_get_mapping_backend_failure_end_to_end() {
    let client = client_with(MockBackend::failing("no such index [missing]")).await;

    let (_, body) = post_json(
        &client,
        tool_call("get_mapping", serde_json::json!({"index": "missing"})),
        None,
    )
    .await;

    assert_eq!(body["result"]["isError"], true);
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("missing"));
}

#[rocket::async_test]
async fn test_ping_returns_empty_success() {
    let client = client_with(MockBackend::healthy()).await;

    let request = serde_json::json!({"jsonrpc": "2.0", "method": "ping", "id": 7});
    let (_, body) = post_json(&client, request, None).await;

    assert_eq!(body["id"], 7);
    assert!(body["result"].as_object().unwrap().is_empty());
}

#[rocket::async_test]
async fn test_unknown_method_is_method_not_found() {
    let client = client_with(MockBackend::healthy()).await;

    let request = serde_json::json!({"jsonrpc": "2.0", "method": "resources/list", "id": 3});
    let (_, body) = post_json(&client, request, None).await;

    assert_eq!(body["error"]["code"], JSONRPC_METHOD_NOT_FOUND);
}

#[rocket::async_test]
async fn test_malformed_body_is_parse_error() {
    let client = client_with(MockBackend::healthy()).await;

    let response = client
        .post("/mcp")
        .header(ContentType::JSON)
        .body("{not json")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], JSONRPC_PARSE_ERROR);
}

#[rocket::async_test]
async fn test_tools_call_without_params_is_invalid() {
    let client = client_with(MockBackend::healthy()).await;

    let request = serde_json::json!({"jsonrpc": "2.0", "method": "tools/call", "id": 4});
    let (_, body) = post_json(&client, request, None).await;

    assert_eq!(body["error"]["code"], JSONRPC_INVALID_PARAMS);
}

#[rocket::async_test]
async fn test_session_termination_lifecycle() {
    let client = client_with(MockBackend::healthy()).await;

    let (header, _) = post_json(&client, initialize_request(), None).await;
    let id = header.expect("session id");

    // First termination removes the session
    let response = client
        .delete("/mcp")
        .header(Header::new(SESSION_HEADER, id.clone()))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(body["result"]["terminated"], id.as_str());

    // Second termination of the same identifier reports not found
    let response = client
        .delete("/mcp")
        .header(Header::new(SESSION_HEADER, id))
        .dispatch()
        .await;
    let body: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(body["error"]["code"], JSONRPC_SESSION_NOT_FOUND);
}

#[rocket::async_test]
async fn test_terminate_without_session_header_is_not_found() {
    let client = client_with(MockBackend::healthy()).await;

    let response = client.delete("/mcp").dispatch().await;
    let body: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(body["error"]["code"], JSONRPC_SESSION_NOT_FOUND);
}
