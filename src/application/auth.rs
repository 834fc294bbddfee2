/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authentication module for the configuration API
//!
//! Two session modes are supported:
//! - OAuth2 client credentials: a token is requested at construction and
//!   requested again whenever it is about to expire
//! - Static bearer token: supplied by the caller, never expires and never refreshes
//!
//! Refreshes are serialised behind a mutex and the expiry is re-checked once
//! the mutex is held, so callers sharing one [`Auth`] issue a single token
//! request per expiry.

use crate::application::config::Config;
use crate::constants::TOKEN_REFRESH_MARGIN_SECS;
use crate::error::{ApiErrorInfo, AppError, AppResult};
use crate::model::auth::{TokenRequest, TokenResponse};
use crate::model::http::build_http_client;
use crate::model::responses::ErrorEnvelope;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

/// How the session obtained its token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// OAuth2 client-credentials grant, refreshed automatically
    Credentials,
    /// Caller-supplied static token
    Bearer,
}

/// Token currently used to authorise requests
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer access token
    pub token: String,
    /// Instant the token stops being valid; `None` for bearer sessions
    pub expires_at: Option<DateTime<Utc>>,
    /// Authentication mode
    pub mode: AuthMode,
}

impl Session {
    /// Session around a static bearer token
    #[must_use]
    pub fn bearer(token: &str) -> Self {
        Self {
            token: token.to_string(),
            expires_at: None,
            mode: AuthMode::Bearer,
        }
    }

    /// Session built from a token endpoint response issued at `issued_at`
    #[must_use]
    pub fn from_token_response(response: TokenResponse, issued_at: DateTime<Utc>) -> Self {
        let expires_at = response.expires_at(issued_at);
        Self {
            token: response.access_token,
            expires_at: Some(expires_at),
            mode: AuthMode::Credentials,
        }
    }

    /// Checks if the token is expired or will expire within the refresh margin.
    ///
    /// Bearer sessions never expire.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match (self.mode, self.expires_at) {
            (AuthMode::Bearer, _) => false,
            (AuthMode::Credentials, None) => true,
            (AuthMode::Credentials, Some(expires_at)) => {
                Utc::now() >= expires_at - Duration::seconds(TOKEN_REFRESH_MARGIN_SECS)
            }
        }
    }

    /// Seconds until the token really expires (negative once it has)
    #[must_use]
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.expires_at
            .map(|expires_at| (expires_at - Utc::now()).num_seconds())
    }
}

/// Session manager shared by the dispatcher and every resource manager
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: RwLock<Session>,
    refresh_lock: Mutex<()>,
}

impl Auth {
    /// Builds the session described by `config`: bearer mode when an access
    /// token is configured, client credentials otherwise
    pub async fn from_config(config: Arc<Config>) -> AppResult<Self> {
        match config.credentials.access_token.clone() {
            Some(token) => Self::from_bearer_token(config, &token),
            None => Self::from_credentials(config).await,
        }
    }

    /// Creates a client-credentials session and obtains the first token
    ///
    /// # Returns
    /// * `Err(AppError::Configuration)` - a credential is blank; no request is sent
    /// * `Err(AppError::Authentication)` - the token endpoint rejected the credentials
    pub async fn from_credentials(config: Arc<Config>) -> AppResult<Self> {
        let credentials = &config.credentials;
        for (field, value) in [
            ("client_id", &credentials.client_id),
            ("client_secret", &credentials.client_secret),
            ("tenant_id", &credentials.tenant_id),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Configuration(format!(
                    "Authentication initialization failed: {field} is required"
                )));
            }
        }

        let client = build_http_client(&config)?;
        let session = request_token(&client, &config).await?;
        info!("✓ Authenticated tenant {}", config.credentials.tenant_id);

        Ok(Self {
            config,
            client,
            session: RwLock::new(session),
            refresh_lock: Mutex::new(()),
        })
    }

    /// Creates a bearer-token session; never sends a request
    pub fn from_bearer_token(config: Arc<Config>, token: &str) -> AppResult<Self> {
        if token.trim().is_empty() {
            return Err(AppError::Configuration(
                "Authentication initialization failed: bearer token is empty".to_string(),
            ));
        }
        let client = build_http_client(&config)?;
        debug!("Using static bearer token authentication");

        Ok(Self {
            config,
            client,
            session: RwLock::new(Session::bearer(token)),
            refresh_lock: Mutex::new(()),
        })
    }

    /// Authentication mode of this session
    pub async fn mode(&self) -> AuthMode {
        self.session.read().await.mode
    }

    /// Client id used for client-credentials sessions
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        let client_id = self.config.credentials.client_id.as_str();
        (!client_id.is_empty()).then_some(client_id)
    }

    /// Snapshot of the current session
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Whether the current token is expired or about to expire
    pub async fn is_expired(&self) -> bool {
        self.session.read().await.is_expired()
    }

    /// Requests a new token unconditionally. No effect on bearer sessions.
    pub async fn refresh(&self) -> AppResult<()> {
        if self.mode().await == AuthMode::Bearer {
            debug!("Bearer token sessions are never refreshed");
            return Ok(());
        }
        let _guard = self.refresh_lock.lock().await;
        let fresh = request_token(&self.client, &self.config).await?;
        *self.session.write().await = fresh;
        info!("✓ Token refreshed successfully");
        Ok(())
    }

    /// Returns a token valid for the next request, refreshing it first when
    /// it is expired or about to expire
    pub async fn access_token(&self) -> AppResult<String> {
        {
            let session = self.session.read().await;
            if !session.is_expired() {
                return Ok(session.token.clone());
            }
        }

        let _guard = self.refresh_lock.lock().await;
        {
            let session = self.session.read().await;
            if !session.is_expired() {
                debug!("Token already refreshed by a concurrent caller");
                return Ok(session.token.clone());
            }
        }

        info!("Access token needs refresh");
        let fresh = request_token(&self.client, &self.config).await?;
        let token = fresh.token.clone();
        *self.session.write().await = fresh;
        info!("✓ Token refreshed successfully");
        Ok(token)
    }
}

/// Runs the client-credentials grant against the configured token endpoint
async fn request_token(client: &Client, config: &Config) -> AppResult<Session> {
    let credentials = &config.credentials;
    let url = &config.rest_api.token_url;
    debug!("Requesting access token from: {}", url);

    let issued_at = Utc::now();
    let response = client
        .post(url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&TokenRequest::client_credentials(&credentials.tenant_id))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Token request failed with status {}: {}", status, body);
        return Err(token_error(status.as_u16(), &body));
    }

    let token: TokenResponse = response.json().await?;
    Ok(Session::from_token_response(token, issued_at))
}

/// Builds the error for a rejected token request. Accepts both the API error
/// envelope and the OAuth2 `{"error", "error_description"}` shape.
fn token_error(status: u16, body: &str) -> AppError {
    let envelope = ErrorEnvelope::parse(body);
    let oauth_reason = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("error_description")
            .or_else(|| v.get("error"))
            .and_then(Value::as_str)
            .map(String::from)
    });
    let reason = envelope
        .message()
        .map(String::from)
        .or(oauth_reason)
        .unwrap_or_else(|| format!("HTTP {status}"));

    AppError::Authentication(
        ApiErrorInfo::new(format!("Token request failed: {reason}"))
            .with_status(status)
            .with_request_id(envelope.request_id.clone())
            .with_details(envelope.details().cloned()),
    )
}
