//! HTTP Transport for MCP
//!
//! Implements the MCP protocol over a single streamable HTTP endpoint.
//! POST submits a JSON-RPC call, GET opens the server-push event
//! stream, DELETE terminates a session. Calls are correlated to
//! sessions via the `Mcp-Session-Id` header.
//!
//! # Supported Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | `initialize` | Initialize the MCP session |
//! | `tools/list` | List available tools |
//! | `tools/call` | Call a tool with arguments |
//! | `ping` | Health check |
//!
//! # Example
//!
//! ```text
//! POST /mcp HTTP/1.1
//! Content-Type: application/json
//!
//! {
//!     "jsonrpc": "2.0",
//!     "method": "tools/list",
//!     "id": 1
//! }
//! ```
//!
//! # Failure semantics
//!
//! Every failure inside dispatch is converted into a JSON-RPC error
//! response on the same exchange; a failed call never tears down the
//! server or the stream.

use super::events::push_events;
use super::types::{McpRequest, McpResponse};
use crate::McpServer;
use crate::constants::{
    JSONRPC_INTERNAL_ERROR, JSONRPC_INVALID_PARAMS, JSONRPC_METHOD_NOT_FOUND, JSONRPC_PARSE_ERROR,
    JSONRPC_SESSION_NOT_FOUND, SESSION_HEADER,
};
use crate::session::SessionManager;
use crate::tools::{create_tool_list, route_tool_call};
use futures::StreamExt;
use rmcp::ServerHandler;
use rmcp::model::CallToolRequestParams;
use rocket::Shutdown;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::request::{self, FromRequest};
use rocket::response::stream::{Event, EventStream};
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{Build, Request, Response, Rocket, State, delete, get, post, routes};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS for browser access
    pub enable_cors: bool,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            enable_cors: true,
        }
    }
}

impl HttpTransportConfig {
    /// Create config for localhost with specified port
    pub fn localhost(port: u16) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port,
            enable_cors: true,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], self.port)))
    }
}

/// Shared state for HTTP transport
#[derive(Clone)]
pub struct HttpTransportState {
    /// MCP server reference (for handling requests)
    pub server: Arc<McpServer>,
    /// Session registry for this transport
    pub sessions: Arc<SessionManager>,
}

/// HTTP transport server
pub struct HttpTransport {
    config: HttpTransportConfig,
    state: HttpTransportState,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, server: Arc<McpServer>) -> Self {
        Self {
            config,
            state: HttpTransportState {
                server,
                sessions: Arc::new(SessionManager::new()),
            },
        }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        let mut rocket = rocket::build().manage(self.state.clone()).mount(
            "/",
            routes![
                handle_mcp_request,
                handle_push_stream,
                handle_terminate,
                health
            ],
        );

        if self.config.enable_cors {
            rocket = rocket.attach(Cors);
        }

        rocket
    }

    /// Start the HTTP transport server
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.socket_addr();
        info!("HTTP transport listening on {}", addr);

        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port))
            // Query DSL bodies can exceed Rocket's 8 KiB string default
            .merge(("limits.string", "1MiB"));

        let rocket = self.rocket().configure(figment);

        rocket
            .launch()
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

        Ok(())
    }
}

/// CORS Fairing for Rocket
///
/// Adds CORS headers to all responses to allow browser access.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Session identifier extracted from the request headers
pub struct SessionHeader(pub Option<String>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionHeader {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        request::Outcome::Success(SessionHeader(
            request
                .headers()
                .get_one(SESSION_HEADER)
                .map(str::to_string),
        ))
    }
}

/// JSON-RPC response carrying an optional session header
pub struct McpHttpResponse {
    response: Json<McpResponse>,
    session_id: Option<String>,
}

impl McpHttpResponse {
    fn new(response: McpResponse) -> Self {
        Self {
            response: Json(response),
            session_id: None,
        }
    }

    fn with_session(response: McpResponse, session_id: Option<String>) -> Self {
        Self {
            response: Json(response),
            session_id,
        }
    }
}

impl<'r> Responder<'r, 'static> for McpHttpResponse {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let mut response = self.response.respond_to(request)?;
        if let Some(session_id) = self.session_id {
            response.set_header(Header::new(SESSION_HEADER, session_id));
        }
        Ok(response)
    }
}

/// Handle MCP request via HTTP POST
///
/// Routes MCP JSON-RPC requests to the appropriate handlers based on
/// method name. The body is parsed by hand so a malformed message
/// yields a JSON-RPC parse error instead of a bare HTTP failure.
#[post("/mcp", data = "<body>")]
async fn handle_mcp_request(
    state: &State<HttpTransportState>,
    session: SessionHeader,
    body: String,
) -> McpHttpResponse {
    let request: McpRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Failed to parse request");
            return McpHttpResponse::new(McpResponse::error(
                None,
                JSONRPC_PARSE_ERROR,
                format!("Parse error: {}", e),
            ));
        }
    };

    // Known sessions get their last-access refreshed; unknown or absent
    // identifiers are tolerated on everything except termination
    if let Some(id) = session.0.as_deref() {
        state.sessions.touch(id);
    }

    let mut created_session = None;
    let response = match request.method.as_str() {
        "initialize" => {
            let (response, session_id) = handle_initialize(state, &session, &request);
            created_session = session_id;
            response
        }
        "tools/list" => handle_tools_list(state, &request).await,
        "tools/call" => handle_tools_call(state, &request).await,
        "ping" => McpResponse::success(request.id.clone(), serde_json::json!({})),
        _ => McpResponse::error(
            request.id.clone(),
            JSONRPC_METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        ),
    };

    McpHttpResponse::with_session(response, created_session)
}

/// Handle the `initialize` method
///
/// Returns server information and capabilities. When the caller did not
/// supply a session identifier, a new session is registered and its
/// identifier is echoed both in the result body and in the
/// `Mcp-Session-Id` response header.
fn handle_initialize(
    state: &HttpTransportState,
    session: &SessionHeader,
    request: &McpRequest,
) -> (McpResponse, Option<String>) {
    let server_info = state.server.get_info();

    let created = match &session.0 {
        Some(_) => None,
        None => Some(state.sessions.create()),
    };

    let mut result = serde_json::json!({
        "protocolVersion": server_info.protocol_version.to_string(),
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": server_info.server_info.name,
            "version": server_info.server_info.version
        },
        "instructions": server_info.instructions
    });

    if let Some(context) = &created {
        info!(session_id = %context.id, "Session created");
        result["sessionId"] = serde_json::Value::String(context.id.clone());
    }

    (
        McpResponse::success(request.id.clone(), result),
        created.map(|context| context.id),
    )
}

/// Handle the `tools/list` method
///
/// Returns all available tools with their schemas.
async fn handle_tools_list(_state: &HttpTransportState, request: &McpRequest) -> McpResponse {
    match create_tool_list() {
        Ok(tools) => {
            let tools_json: Vec<serde_json::Value> = tools
                .into_iter()
                .map(|tool| {
                    serde_json::json!({
                        "name": tool.name,
                        "description": tool.description,
                        "inputSchema": serde_json::to_value(tool.input_schema.as_ref()).ok()
                    })
                })
                .collect();

            McpResponse::success(
                request.id.clone(),
                serde_json::json!({ "tools": tools_json }),
            )
        }
        Err(e) => {
            error!(error = ?e, "Failed to list tools");
            McpResponse::error(
                request.id.clone(),
                JSONRPC_INTERNAL_ERROR,
                format!("Failed to list tools: {:?}", e),
            )
        }
    }
}

/// Parse tool call parameters from the request
fn parse_tool_call_params(
    params: &serde_json::Value,
) -> Result<CallToolRequestParams, (i32, &'static str)> {
    let tool_name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or((
            JSONRPC_INVALID_PARAMS,
            "Missing 'name' parameter for tools/call",
        ))?
        .to_string();

    let arguments = params.get("arguments").and_then(|v| v.as_object().cloned());

    Ok(CallToolRequestParams {
        name: tool_name.into(),
        arguments,
        task: None,
        meta: None,
    })
}

/// Convert tool call result to JSON response
fn tool_result_to_json(result: rmcp::model::CallToolResult) -> serde_json::Value {
    let content_json: Vec<serde_json::Value> = result
        .content
        .iter()
        .map(|content| {
            serde_json::to_value(content).unwrap_or(serde_json::json!({
                "type": "text",
                "text": "Error serializing content"
            }))
        })
        .collect();

    serde_json::json!({
        "content": content_json,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Handle the `tools/call` method
///
/// Executes the specified tool with the provided arguments.
async fn handle_tools_call(state: &HttpTransportState, request: &McpRequest) -> McpResponse {
    let params = match &request.params {
        Some(params) => params,
        None => {
            return McpResponse::error(
                request.id.clone(),
                JSONRPC_INVALID_PARAMS,
                "Missing params for tools/call",
            );
        }
    };

    let call_request = match parse_tool_call_params(params) {
        Ok(req) => req,
        Err((code, msg)) => return McpResponse::error(request.id.clone(), code, msg),
    };

    let handlers = state.server.tool_handlers();

    match route_tool_call(call_request, &handlers).await {
        Ok(result) => McpResponse::success(request.id.clone(), tool_result_to_json(result)),
        Err(e) => {
            error!(error = ?e, "Tool call failed");
            McpResponse::error(
                request.id.clone(),
                JSONRPC_INTERNAL_ERROR,
                format!("Tool call failed: {:?}", e),
            )
        }
    }
}

/// Handle session termination via HTTP DELETE
///
/// Removes the session record for a known identifier; a missing or
/// unknown identifier yields a not-found error with no side effects,
/// so repeated termination is idempotent.
#[delete("/mcp")]
async fn handle_terminate(
    state: &State<HttpTransportState>,
    session: SessionHeader,
) -> Json<McpResponse> {
    match session
        .0
        .as_deref()
        .and_then(|id| state.sessions.remove(id))
    {
        Some(context) => {
            info!(session_id = %context.id, "Session terminated");
            Json(McpResponse::success(
                None,
                serde_json::json!({ "terminated": context.id }),
            ))
        }
        None => Json(McpResponse::error(
            None,
            JSONRPC_SESSION_NOT_FOUND,
            "Session not found",
        )),
    }
}

/// Handle the server-push event stream via HTTP GET
///
/// Emits a connection-established event immediately, then heartbeats
/// until the subscription is cancelled. Graceful shutdown cancels the
/// supervised loop, which emits one disconnection event before the
/// stream closes; a client disconnect simply drops the stream.
#[get("/mcp")]
fn handle_push_stream(shutdown: Shutdown) -> EventStream![] {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();

    EventStream! {
        info!("Push stream opened");
        let mut shutdown = shutdown;
        let mut events = std::pin::pin!(push_events(cancel));

        loop {
            tokio::select! {
                event = events.next() => match event {
                    Some(event) => yield Event::data(event.data()).event(event.name()),
                    None => break,
                },
                _ = &mut shutdown => {
                    trigger.cancel();
                    // Drain the disconnection event before closing
                    while let Some(event) = events.next().await {
                        yield Event::data(event.data()).event(event.name());
                    }
                    break;
                }
            }
        }

        info!("Push stream closed");
    }
}

/// Health-check endpoint returning a fixed status document
#[get("/health")]
fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "osmcp",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
