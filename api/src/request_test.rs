use super::*;

#[test]
fn join_url_collapses_slashes() {
    assert_eq!(join_url("http://h/api/", "/posts"), "http://h/api/posts");
    assert_eq!(join_url("http://h/api", "posts"), "http://h/api/posts");
}

#[test]
fn builder_without_bearer_has_no_authorization() {
    let request = RequestBuilder::new(Method::Get, "http://h/api", "/posts").build();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "http://h/api/posts");
    assert_eq!(request.header(AUTHORIZATION), None);
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.body, None);
}

#[test]
fn builder_attaches_bearer_value() {
    let request = RequestBuilder::new(Method::Get, "http://h/api", "/posts")
        .bearer(Some("Bearer t1".to_owned()))
        .build();
    assert_eq!(request.header("authorization"), Some("Bearer t1"));
}

#[test]
fn builder_json_sets_body_and_content_type() {
    let request = RequestBuilder::new(Method::Post, "http://h/api", "/auth/login")
        .json(&serde_json::json!({ "email": "a@b.c" }))
        .expect("json")
        .build();
    assert_eq!(request.header(CONTENT_TYPE), Some("application/json"));
    assert_eq!(request.body.as_deref(), Some(r#"{"email":"a@b.c"}"#));
}

#[test]
fn response_json_rejects_error_status() {
    let response = ApiResponse { status: 401, body: "nope".to_owned() };
    let err = response.json::<serde_json::Value>().expect_err("status");
    assert!(matches!(err, ApiError::Status { status: 401, .. }));
}

#[test]
fn response_json_reports_decode_failure() {
    let response = ApiResponse { status: 200, body: "<html>".to_owned() };
    let err = response.json::<serde_json::Value>().expect_err("decode");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn method_names() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
}
