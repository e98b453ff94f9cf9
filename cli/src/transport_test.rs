use api::RequestBuilder;
use serde_json::Value;

use super::*;
use crate::test_support::spawn_backend;

#[tokio::test]
async fn sends_headers_and_body_and_returns_raw_response() {
    let base = spawn_backend().await;
    let request = RequestBuilder::new(Method::Post, &base, "/echo")
        .bearer(Some("Bearer abc".to_owned()))
        .json(&serde_json::json!({ "content": "hi" }))
        .expect("json body")
        .build();

    let response = ReqwestTransport::default().execute(request).await.expect("response");

    assert_eq!(response.status, 200);
    let echoed: Value = serde_json::from_str(&response.body).expect("echo json");
    assert_eq!(echoed["authorization"], "Bearer abc");
    assert_eq!(echoed["content_type"], "application/json");
    assert_eq!(echoed["body"], r#"{"content":"hi"}"#);
}

#[tokio::test]
async fn non_success_status_is_returned_not_raised() {
    let base = spawn_backend().await;
    let request = RequestBuilder::new(Method::Get, &base, "/users/nobody").build();

    let response = ReqwestTransport::default().execute(request).await.expect("response");

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let request = RequestBuilder::new(Method::Get, "http://127.0.0.1:1/api", "/posts").build();
    let result = ReqwestTransport::default().execute(request).await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}
