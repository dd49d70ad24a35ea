mod common;

use common::*;

use http::StatusCode;
use image_decoder::types::Environment;
use serde_json::json;

#[tokio::test]
async fn test_health_reports_version() {
    let setup = TestSetup::new();

    let response = setup
        .send_get_request("/health")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["semver"], json!(env!("CARGO_PKG_VERSION")));
    assert_eq!(body["storage_available"], json!(true));
}

#[tokio::test]
async fn test_health_degraded_without_storage_dir() {
    let setup = TestSetup::new();
    std::fs::remove_dir(setup.storage_dir.path()).unwrap();

    let response = setup
        .send_get_request("/health")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], json!("degraded"));
    assert_eq!(body["storage_available"], json!(false));
}

#[tokio::test]
async fn test_openapi_schema_lists_decode_route() {
    let setup = TestSetup::new();

    let response = setup
        .send_get_request("/openapi.json")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert!(body["paths"]["/decode-image"]["post"].is_object());
    assert!(body["paths"]["/health"]["get"].is_object());
}

#[tokio::test]
async fn test_openapi_schema_hidden_in_production() {
    let setup = TestSetup::with_environment(Environment::Production);

    let response = setup
        .send_get_request("/openapi.json")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
