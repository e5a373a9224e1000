//! Tests for tool argument deserialization and validation

use osmcp_server::args::{GetMappingArgs, SearchDocumentsArgs};
use validator::Validate;

#[test]
fn test_get_mapping_args_deserialize() {
    let args: GetMappingArgs = serde_json::from_str(r#"{"index": "logs-2024"}"#).unwrap();
    assert_eq!(args.index, "logs-2024");
    assert!(args.validate().is_ok());
}

#[test]
fn test_get_mapping_args_missing_index_fails_validation() {
    // Missing required fields default to empty and are caught by validation,
    // not by deserialization
    let args: GetMappingArgs = serde_json::from_str("{}").unwrap();
    assert!(args.index.is_empty());
    assert!(args.validate().is_err());
}

#[test]
fn test_search_documents_args_full() {
    let args: SearchDocumentsArgs = serde_json::from_str(
        r#"{"index": "logs", "body": {"query": {"match_all": {}}}}"#,
    )
    .unwrap();
    assert_eq!(args.index, "logs");
    assert!(args.has_body());
    assert!(args.validate().is_ok());
}

#[test]
fn test_search_documents_args_missing_body() {
    let args: SearchDocumentsArgs = serde_json::from_str(r#"{"index": "logs"}"#).unwrap();
    assert!(!args.has_body());
    // index alone still validates; the handler rejects the absent body
    assert!(args.validate().is_ok());
}

#[test]
fn test_zero_parameter_args_accept_empty_object() {
    let health: osmcp_server::args::GetClusterHealthArgs = serde_json::from_str("{}").unwrap();
    let stats: osmcp_server::args::GetClusterStatsArgs = serde_json::from_str("{}").unwrap();
    let list: osmcp_server::args::ListIndicesArgs = serde_json::from_str("{}").unwrap();

    // Zero-parameter tools carry no state beyond their type
    assert_eq!(format!("{health:?}"), "GetClusterHealthArgs");
    assert_eq!(format!("{stats:?}"), "GetClusterStatsArgs");
    assert_eq!(format!("{list:?}"), "ListIndicesArgs");
}
