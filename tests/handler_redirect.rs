mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    let code = common::create_test_mapping(&state, "https://example.com");
    let server = common::create_test_server(state);

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_to_normalized_url() {
    let state = common::create_test_state();
    let code = common::create_test_mapping(&state, "www.google.com");
    let server = common::create_test_server(state);

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "http://www.google.com");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/zzzzzzz").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "Error": "URL not found" }));
}

#[tokio::test]
async fn test_redirect_after_shorten() {
    let server = common::create_test_server(common::create_test_state());

    let created = server
        .post("/short")
        .json(&json!({ "long_url": "https://rust-lang.org" }))
        .await
        .json::<serde_json::Value>();
    let code = created["short_url"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://rust-lang.org");
}

#[tokio::test]
async fn test_redirect_encodes_control_characters() {
    let server = common::create_test_server(common::create_test_state());

    let created = server
        .post("/short")
        .json(&json!({ "long_url": "example.com/a\nb" }))
        .await
        .json::<serde_json::Value>();
    let code = created["short_url"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "http://example.com/a%0Ab");
}

#[tokio::test]
async fn test_redirect_encodes_spaces_and_non_ascii() {
    let state = common::create_test_state();
    let code = common::create_test_mapping(&state, "https://example.com/caf\u{e9} menu");
    let server = common::create_test_server(state);

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        "https://example.com/caf%C3%A9%20menu"
    );
}
