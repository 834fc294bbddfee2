use scm_client::application::config::Config;
use scm_client::application::container::{ContainerKind, ContainerSelector};
use scm_client::constants::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_URL};
use scm_client::error::AppError;

#[test]
fn test_credentials_config_defaults() {
    let config = Config::with_credentials("id", "secret", "tenant");
    assert!(!config.is_bearer());
    assert_eq!(config.rest_api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.rest_api.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.credentials.tenant_id, "tenant");
}

#[test]
fn test_bearer_config_and_overrides() {
    let config = Config::with_bearer_token("abc")
        .base_url("http://localhost:8080/")
        .token_url("http://localhost:8080/token")
        .timeout(5);
    assert!(config.is_bearer());
    assert_eq!(config.rest_api.base_url, "http://localhost:8080");
    assert_eq!(config.rest_api.token_url, "http://localhost:8080/token");
    assert_eq!(config.rest_api.timeout, 5);
}

#[test]
fn test_config_display_is_json() {
    let config = Config::with_credentials("id", "secret", "tenant");
    let rendered = config.to_string();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["credentials"]["client_id"], "id");
}

#[test]
fn test_container_selector_resolution() {
    let container = ContainerSelector::snippet("lab").resolve().unwrap();
    assert_eq!(container.kind(), ContainerKind::Snippet);
    assert_eq!(container.value(), "lab");
    assert_eq!(
        container.query_pair(),
        ("snippet".to_string(), "lab".to_string())
    );

    let err = ContainerSelector::device("fw-1")
        .with_folder("Texas")
        .resolve()
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidContainer(_)));

    let err = ContainerSelector::device("").resolve().unwrap_err();
    assert!(matches!(err, AppError::MissingParameter(_)));
}

#[test]
fn test_bearer_client_builds_without_network() {
    use scm_client::application::auth::AuthMode;
    use scm_client::application::client::Client;

    let client = tokio_test::block_on(Client::new(
        Config::with_bearer_token("abc").base_url("http://127.0.0.1:1"),
    ))
    .unwrap();
    assert_eq!(tokio_test::block_on(client.auth_mode()), AuthMode::Bearer);
    assert_eq!(client.config().rest_api.base_url, "http://127.0.0.1:1");
    assert_eq!(
        tokio_test::block_on(client.auth().access_token()).unwrap(),
        "abc"
    );
}

#[test]
fn test_empty_bearer_token_is_rejected() {
    use scm_client::application::client::Client;

    let err = tokio_test::block_on(Client::new(Config::with_bearer_token(""))).err();
    assert!(matches!(err, Some(AppError::Configuration(_))));
}
