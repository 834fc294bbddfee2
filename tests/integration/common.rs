// Common utilities for integration tests

use mockito::{Matcher, Mock, ServerGuard};
use scm_client::prelude::*;

pub const TOKEN_PATH: &str = "/oauth2/access_token";
pub const CLIENT_ID: &str = "client-1";
pub const CLIENT_SECRET: &str = "secret-1";
pub const TENANT_ID: &str = "1234567890";
/// `client-1:secret-1` in base64
pub const BASIC_AUTH: &str = "Basic Y2xpZW50LTE6c2VjcmV0LTE=";

/// Client using a static bearer token against the mock server
pub async fn bearer_client(server: &ServerGuard) -> Arc<Client> {
    setup_logger();
    let config = Config::with_bearer_token("static-token").base_url(&server.url());
    Arc::new(Client::new(config).await.expect("bearer client"))
}

/// Credentials configuration pointed at the mock server
pub fn credentials_config(server: &ServerGuard) -> Config {
    Config::with_credentials(CLIENT_ID, CLIENT_SECRET, TENANT_ID)
        .base_url(&server.url())
        .token_url(&format!("{}{}", server.url(), TOKEN_PATH))
}

/// Mocks the token endpoint, issuing tokens valid for `expires_in` seconds
pub async fn mock_token(server: &mut ServerGuard, token: &str, expires_in: i64, hits: usize) -> Mock {
    server
        .mock("POST", TOKEN_PATH)
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
            Matcher::UrlEncoded("scope".into(), format!("tsg_id:{TENANT_ID}")),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"access_token":"{token}","token_type":"Bearer","expires_in":{expires_in},"scope":"tsg_id:{TENANT_ID}"}}"#
        ))
        .expect(hits)
        .create_async()
        .await
}

/// Serialised error envelope
pub fn error_body(message: &str, error_type: Option<&str>, request_id: &str) -> String {
    let details = error_type
        .map(|t| format!(r#","details":{{"errorType":"{t}"}}"#))
        .unwrap_or_default();
    format!(r#"{{"_errors":[{{"code":"E003","message":"{message}"{details}}}],"_request_id":"{request_id}"}}"#)
}
