use crate::common::*;
use mockito::Server;
use scm_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_get_sends_bearer_token_and_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/config/objects/v1/tags")
        .match_header("authorization", "Bearer static-token")
        .match_header("accept", "application/json")
        .match_query(mockito::Matcher::UrlEncoded("folder".into(), "Texas".into()))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let client = bearer_client(&server).await;
    let params = vec![("folder".to_string(), "Texas".to_string())];
    let body = client.get("/config/objects/v1/tags", &params).await.unwrap();

    assert_eq!(body, Some(json!({"data": []})));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_success_body_is_none() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/config/objects/v1/tags/abc")
        .with_status(204)
        .create_async()
        .await;

    let client = bearer_client(&server).await;
    assert_eq!(client.delete("/config/objects/v1/tags/abc").await.unwrap(), None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_success_body_is_api_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/broken")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let client = bearer_client(&server).await;
    let err = client.get("/broken", &[]).await.unwrap_err();
    assert!(matches!(err, AppError::Api(_)));
    assert!(err.to_string().starts_with("API request failed: "));
}

#[tokio::test]
async fn test_transport_failure_is_api_error() {
    setup_logger();
    let config = Config::with_bearer_token("static-token")
        .base_url("http://127.0.0.1:1")
        .timeout(2);
    let client = Client::new(config).await.unwrap();

    let err = client.get("/config/objects/v1/tags", &[]).await.unwrap_err();
    assert!(matches!(err, AppError::Api(_)));
    assert!(err.to_string().starts_with("API request failed: "));
}

#[tokio::test]
async fn test_failures_are_classified_once_with_request_id() {
    let mut server = Server::new_async().await;
    let cases: Vec<(u16, Option<&str>, fn(&AppError) -> bool)> = vec![
        (400, Some("Object Already Exists"), |e| matches!(e, AppError::ObjectAlreadyExists(_))),
        (400, None, |e| matches!(e, AppError::BadRequest(_))),
        (401, None, |e| matches!(e, AppError::Authentication(_))),
        (403, None, |e| matches!(e, AppError::Authorization(_))),
        (404, None, |e| matches!(e, AppError::NotFound(_))),
        (405, None, |e| matches!(e, AppError::MethodNotAllowed(_))),
        (409, Some("Name Not Unique"), |e| matches!(e, AppError::NameNotUnique(_))),
        (409, Some("Reference Not Zero"), |e| matches!(e, AppError::ReferenceNotZero(_))),
        (409, None, |e| matches!(e, AppError::Conflict(_))),
        (501, None, |e| matches!(e, AppError::VersionNotSupported(_))),
        (504, None, |e| matches!(e, AppError::SessionTimeout(_))),
        (500, None, |e| matches!(e, AppError::Api(_))),
    ];

    let client = bearer_client(&server).await;
    for (i, (status, error_type, is_expected)) in cases.into_iter().enumerate() {
        let path = format!("/case/{i}");
        let mock = server
            .mock("GET", path.as_str())
            .with_status(status as usize)
            .with_body(error_body("boom", error_type, &format!("req-{i}")))
            .expect(1)
            .create_async()
            .await;

        let err = client.get(&path, &[]).await.unwrap_err();
        assert!(is_expected(&err), "status {status}: got {err:?}");
        assert_eq!(err.http_status_code(), Some(status));
        assert_eq!(err.request_id(), Some(format!("req-{i}").as_str()));
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_unmapped_status_message_includes_code() {
    let mut server = Server::new_async().await;
    let _teapot = server
        .mock("GET", "/teapot")
        .with_status(418)
        .with_body(error_body("short and stout", None, "req-t"))
        .create_async()
        .await;
    let _bare = server
        .mock("GET", "/bare")
        .with_status(502)
        .with_body("")
        .create_async()
        .await;

    let client = bearer_client(&server).await;
    let err = client.get("/teapot", &[]).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 418: short and stout");

    let err = client.get("/bare", &[]).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    assert_eq!(err.request_id(), None);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/config/objects/v1/tags")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(json!({"name": "web", "folder": "Texas"})))
        .with_status(201)
        .with_body(r#"{"id":"t-1","name":"web","folder":"Texas"}"#)
        .create_async()
        .await;

    let client = bearer_client(&server).await;
    let body = client
        .post("/config/objects/v1/tags", &json!({"name": "web", "folder": "Texas"}))
        .await
        .unwrap();
    assert_eq!(body.unwrap()["id"], "t-1");
    mock.assert_async().await;
}
