use crate::common::*;
use mockito::Server;
use scm_client::prelude::*;

#[tokio::test]
async fn test_credentials_session_obtains_token_once_while_valid() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, "token-a", 3600, 1).await;
    let jobs = server
        .mock("GET", JOBS_ENDPOINT)
        .match_header("authorization", "Bearer token-a")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data":[],"limit":100,"offset":0,"total":0}"#)
        .expect(2)
        .create_async()
        .await;

    let client = Client::new(credentials_config(&server)).await.unwrap();
    assert_eq!(client.auth_mode().await, AuthMode::Credentials);
    assert!(!client.auth().is_expired().await);

    client.list_jobs(&JobListRequest::default()).await.unwrap();
    client.list_jobs(&JobListRequest::default()).await.unwrap();

    token.assert_async().await;
    jobs.assert_async().await;
}

#[tokio::test]
async fn test_expired_token_is_refreshed_before_each_call() {
    let mut server = Server::new_async().await;
    // Zero lifetime: always inside the refresh margin.
    let token = mock_token(&mut server, "short-lived", 0, 3).await;
    let jobs = server
        .mock("GET", JOBS_ENDPOINT)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .expect(2)
        .create_async()
        .await;

    let client = Client::new(credentials_config(&server)).await.unwrap();
    assert!(client.auth().is_expired().await);

    client.list_jobs(&JobListRequest::default()).await.unwrap();
    client.list_jobs(&JobListRequest::default()).await.unwrap();

    token.assert_async().await;
    jobs.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_callers_share_one_refresh() {
    let mut server = Server::new_async().await;
    let first = mock_token(&mut server, "first", 0, 1).await;

    let config = Arc::new(credentials_config(&server));
    let auth = Arc::new(Auth::from_credentials(config).await.unwrap());
    first.assert_async().await;
    first.remove_async().await;

    let second = mock_token(&mut server, "second", 3600, 1).await;
    let (a, b, c) = tokio::join!(auth.access_token(), auth.access_token(), auth.access_token());
    assert_eq!(a.unwrap(), "second");
    assert_eq!(b.unwrap(), "second");
    assert_eq!(c.unwrap(), "second");
    second.assert_async().await;
}

#[tokio::test]
async fn test_failed_refresh_reaches_caller_without_dispatch() {
    let mut server = Server::new_async().await;
    let first = mock_token(&mut server, "short-lived", 0, 1).await;
    let client = Client::new(credentials_config(&server)).await.unwrap();
    first.assert_async().await;
    first.remove_async().await;

    let rejected = server
        .mock("POST", TOKEN_PATH)
        .with_status(401)
        .with_body(r#"{"error":"invalid_client","error_description":"Client secret rotated"}"#)
        .expect(1)
        .create_async()
        .await;
    let jobs = server
        .mock("GET", JOBS_ENDPOINT)
        .match_query(mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client.list_jobs(&JobListRequest::default()).await.unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)));
    assert_eq!(err.to_string(), "Token request failed: Client secret rotated");

    rejected.assert_async().await;
    jobs.assert_async().await;
}

#[tokio::test]
async fn test_rejected_credentials_raise_authentication() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("POST", TOKEN_PATH)
        .with_status(401)
        .with_body(r#"{"error":"invalid_client","error_description":"Client authentication failed"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = Client::new(credentials_config(&server)).await.err().unwrap();
    assert!(matches!(err, AppError::Authentication(_)));
    assert_eq!(err.http_status_code(), Some(401));
    token.assert_async().await;
}

#[tokio::test]
async fn test_missing_credentials_fail_without_network() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, "unused", 3600, 0).await;

    let config = Config::with_credentials("", CLIENT_SECRET, TENANT_ID)
        .token_url(&format!("{}{}", server.url(), TOKEN_PATH));
    let err = Client::new(config).await.err().unwrap();
    assert!(matches!(err, AppError::Configuration(_)));
    assert_eq!(
        err.to_string(),
        "Authentication initialization failed: client_id is required"
    );
    token.assert_async().await;
}

#[tokio::test]
async fn test_bearer_session_never_refreshes() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, "unused", 3600, 0).await;
    let client = bearer_client(&server).await;

    assert_eq!(client.auth_mode().await, AuthMode::Bearer);
    assert!(!client.auth().is_expired().await);
    client.auth().refresh().await.unwrap();
    assert_eq!(client.auth().access_token().await.unwrap(), "static-token");
    token.assert_async().await;
}
