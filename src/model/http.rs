/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::classifier::classify;
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::{AppError, AppResult};
use crate::model::responses::ErrorEnvelope;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Builds the reqwest client used for API and token requests.
///
/// The configured timeout is the only way a caller bounds a request.
pub fn build_http_client(config: &Config) -> AppResult<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.rest_api.timeout))
        .build()
        .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {e}")))
}

/// Sends one authorised request and interprets the response.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Limiter the request waits on before it is sent
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `token` - Bearer token for the `Authorization` header
/// * `params` - Query parameters
/// * `body` - Optional body, sent as JSON
///
/// # Returns
///
/// * `Ok(Some(Value))` - 2xx with a JSON body
/// * `Ok(None)` - 2xx with an empty body
/// * `Err(AppError::Api)` - transport failure or a 2xx body that is not JSON
/// * `Err(_)` - the classified error of a non-2xx response
///
/// The request is sent exactly once.
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    token: &str,
    params: &[(String, String)],
    body: Option<&B>,
) -> AppResult<Option<Value>> {
    rate_limiter.wait().await;

    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .bearer_auth(token)
        .header(ACCEPT, "application/json");

    if !params.is_empty() {
        request = request.query(params);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await.map_err(|e| {
        error!("Transport failure for {}: {}", url, e);
        AppError::from(e)
    })?;
    let status = response.status();
    debug!("Response status: {}", status);

    let text = response.text().await?;

    if !status.is_success() {
        let envelope = ErrorEnvelope::parse(&text);
        let err = classify(status.as_u16(), &envelope);
        error!(
            "Request failed with status {} (request id: {}): {}",
            status,
            err.request_id().unwrap_or("-"),
            err
        );
        return Err(err);
    }

    parse_success_body(&text)
}

/// Parses a 2xx body. Empty bodies yield `None`.
pub fn parse_success_body(text: &str) -> AppResult<Option<Value>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| AppError::api(format!("API request failed: {e}")))
}
