//! Handler boundary tests
//!
//! Validates the pass-through contract: one backend call per request,
//! exactly one non-empty content item per success, backend failures
//! converted to error content instead of escaping the handler.

use rmcp::handler::server::wrapper::Parameters;
use std::sync::Arc;

use osmcp_server::args::{
    GetClusterHealthArgs, GetClusterStatsArgs, GetMappingArgs, GetSettingsArgs, ListIndicesArgs,
    SearchDocumentsArgs,
};
use osmcp_server::handlers::{
    GetClusterHealthHandler, GetClusterStatsHandler, GetMappingHandler, GetSettingsHandler,
    ListIndicesHandler, SearchDocumentsHandler,
};

use crate::test_utils::extract_text_content;
use crate::test_utils::mock_backend::MockBackend;

#[tokio::test]
async fn test_cluster_health_returns_single_nonempty_content() {
    let handler = GetClusterHealthHandler::new(Arc::new(MockBackend::healthy()));
    let result = handler
        .handle(Parameters(GetClusterHealthArgs::default()))
        .await
        .expect("handler never raises past the boundary");

    assert_eq!(result.content.len(), 1);
    assert!(!result.is_error.unwrap_or(false));
    assert!(!extract_text_content(&result.content).is_empty());
}

#[tokio::test]
async fn test_cluster_stats_returns_single_nonempty_content() {
    let handler = GetClusterStatsHandler::new(Arc::new(MockBackend::healthy()));
    let result = handler
        .handle(Parameters(GetClusterStatsArgs::default()))
        .await
        .unwrap();

    assert_eq!(result.content.len(), 1);
    assert!(!extract_text_content(&result.content).is_empty());
}

#[tokio::test]
async fn test_list_indices_contains_every_index_name() {
    let handler = ListIndicesHandler::new(Arc::new(MockBackend::healthy()));
    let result = handler
        .handle(Parameters(ListIndicesArgs::default()))
        .await
        .unwrap();

    let text = extract_text_content(&result.content);
    assert!(text.contains("\"a\""));
    assert!(text.contains("\"b\""));
}

#[tokio::test]
async fn test_get_mapping_success() {
    let handler = GetMappingHandler::new(Arc::new(MockBackend::healthy()));
    let args: GetMappingArgs = serde_json::from_value(serde_json::json!({"index": "logs"})).unwrap();
    let result = handler.handle(Parameters(args)).await.unwrap();

    assert!(!result.is_error.unwrap_or(false));
    assert!(extract_text_content(&result.content).contains("logs"));
}

#[tokio::test]
async fn test_get_mapping_backend_failure_becomes_error_content() {
    let handler = GetMappingHandler::new(Arc::new(MockBackend::failing("no such index [missing]")));
    let args: GetMappingArgs =
        serde_json::from_value(serde_json::json!({"index": "missing"})).unwrap();
    let result = handler
        .handle(Parameters(args))
        .await
        .expect("backend failure must not raise past the handler");

    assert!(result.is_error.unwrap_or(false));
    let text = extract_text_content(&result.content);
    assert!(text.starts_with("Error: "));
    assert!(text.contains("missing"));
}

#[tokio::test]
async fn test_get_mapping_missing_index_is_error_content() {
    let handler = GetMappingHandler::new(Arc::new(MockBackend::healthy()));
    let args: GetMappingArgs = serde_json::from_value(serde_json::json!({})).unwrap();
    let result = handler.handle(Parameters(args)).await.unwrap();

    assert!(result.is_error.unwrap_or(false));
    assert!(extract_text_content(&result.content).contains("index"));
}

#[tokio::test]
async fn test_get_settings_success() {
    let handler = GetSettingsHandler::new(Arc::new(MockBackend::healthy()));
    let args: GetSettingsArgs =
        serde_json::from_value(serde_json::json!({"index": "logs"})).unwrap();
    let result = handler.handle(Parameters(args)).await.unwrap();

    assert_eq!(result.content.len(), 1);
    assert!(extract_text_content(&result.content).contains("number_of_shards"));
}

#[tokio::test]
async fn test_search_documents_success() {
    let handler = SearchDocumentsHandler::new(Arc::new(MockBackend::healthy()));
    let args: SearchDocumentsArgs = serde_json::from_value(serde_json::json!({
        "index": "logs",
        "body": {"query": {"match_all": {}}}
    }))
    .unwrap();
    let result = handler.handle(Parameters(args)).await.unwrap();

    assert!(!result.is_error.unwrap_or(false));
    assert!(extract_text_content(&result.content).contains("hits"));
}

#[tokio::test]
async fn test_search_documents_missing_body_is_error_content() {
    let handler = SearchDocumentsHandler::new(Arc::new(MockBackend::healthy()));
    let args: SearchDocumentsArgs =
        serde_json::from_value(serde_json::json!({"index": "logs"})).unwrap();
    let result = handler.handle(Parameters(args)).await.unwrap();

    assert!(result.is_error.unwrap_or(false));
    assert!(extract_text_content(&result.content).contains("body"));
}

#[tokio::test]
async fn test_every_zero_parameter_handler_survives_backend_failure() {
    let backend = Arc::new(MockBackend::failing("cluster unreachable"));

    let health = GetClusterHealthHandler::new(backend.clone())
        .handle(Parameters(GetClusterHealthArgs::default()))
        .await
        .unwrap();
    let stats = GetClusterStatsHandler::new(backend.clone())
        .handle(Parameters(GetClusterStatsArgs::default()))
        .await
        .unwrap();
    let indices = ListIndicesHandler::new(backend)
        .handle(Parameters(ListIndicesArgs::default()))
        .await
        .unwrap();

    for result in [health, stats, indices] {
        assert!(result.is_error.unwrap_or(false));
        assert!(extract_text_content(&result.content).contains("cluster unreachable"));
    }
}
