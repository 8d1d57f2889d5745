//! HTTP verification client tests against a mock server

use mockito::Server;
use orderflow::adapters::verification::{
    ApiStatus, HttpVerificationClient, VerificationClient, VerificationResponse,
};
use orderflow::config::{secret_string, VerificationConfig};
use orderflow::domain::{OrderFlowError, OrderId, VerificationError};

fn client_for(base_url: &str, api_token: Option<&str>) -> HttpVerificationClient {
    HttpVerificationClient::new(VerificationConfig {
        base_url: base_url.to_string(),
        api_token: api_token.map(|t| secret_string(t.to_string())),
        timeout_seconds: 5,
        tls_verify: true,
    })
    .unwrap()
}

#[tokio::test]
async fn test_success_response_is_decoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/orders/42/verification")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"success","data":72.5}"#)
        .create_async()
        .await;

    let client = client_for(&server.url(), None);
    let response = client.verify(OrderId::new(42)).await.unwrap();

    assert_eq!(response, VerificationResponse::success(72.5));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/orders/1/verification")
        .match_header("authorization", "Bearer verification-token")
        .with_status(200)
        .with_body(r#"{"status":"failure"}"#)
        .create_async()
        .await;

    let client = client_for(&server.url(), Some("verification-token"));
    let response = client.verify(OrderId::new(1)).await.unwrap();

    assert_eq!(response.status, ApiStatus::Failure);
    assert_eq!(response.data, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/orders/9/verification")
        .with_status(200)
        .with_body(r#"{"status":"error"}"#)
        .create_async()
        .await;

    let client = client_for(&format!("{}/api/v1", server.url()), None);
    let response = client.verify(OrderId::new(9)).await.unwrap();

    assert_eq!(response.status, ApiStatus::Error);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_with_decodable_body_is_a_response() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/orders/3/verification")
        .with_status(422)
        .with_body(r#"{"status":"failure"}"#)
        .create_async()
        .await;

    let client = client_for(&server.url(), None);
    let response = client.verify(OrderId::new(3)).await.unwrap();

    assert!(!response.is_success());
    assert_eq!(response.status, ApiStatus::Failure);
}

#[tokio::test]
async fn test_error_status_with_undecodable_body_is_server_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/orders/4/verification")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let client = client_for(&server.url(), None);
    let err = client.verify(OrderId::new(4)).await.unwrap_err();

    assert!(err.is_collaborator_fault());
    match err {
        OrderFlowError::Verification(VerificationError::ServerError { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_success_body_is_invalid_response() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/orders/5/verification")
        .with_status(200)
        .with_body("<html>ok</html>")
        .create_async()
        .await;

    let client = client_for(&server.url(), None);
    let err = client.verify(OrderId::new(5)).await.unwrap_err();

    assert!(matches!(
        err,
        OrderFlowError::Verification(VerificationError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_unreachable_service_is_connection_failure() {
    // Port 1 is reserved and refuses connections on loopback
    let client = client_for("http://127.0.0.1:1", None);
    let err = client.verify(OrderId::new(6)).await.unwrap_err();

    assert!(err.is_collaborator_fault());
    assert!(matches!(
        err,
        OrderFlowError::Verification(VerificationError::ConnectionFailed(_))
    ));
}
