/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Request dispatcher
//!
//! Every call goes through [`Client::send`]:
//! 1. the session is refreshed once if it is about to expire
//! 2. the request is sent once
//! 3. the body is returned, or the failure is classified into an [`AppError`]
//!
//! # Example
//! ```ignore
//! use scm_client::application::client::Client;
//! use scm_client::application::config::Config;
//!
//! let client = Client::new(Config::new()).await?;
//! let jobs = client.get("/config/operations/v1/jobs", &[]).await?;
//! ```

use crate::application::auth::{Auth, AuthMode};
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::error::AppResult;
use crate::model::http::{build_http_client, make_http_request};
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Authenticated client shared by every resource manager
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
}

impl Client {
    /// Creates a client and establishes its session
    ///
    /// # Arguments
    /// * `config` - Credentials or bearer token plus API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to send requests
    /// * `Err(AppError::Configuration)` - Credentials are structurally invalid
    /// * `Err(AppError::Authentication)` - The token endpoint rejected the credentials
    pub async fn new(config: Config) -> AppResult<Self> {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::from_config(config.clone()).await?);
        Self::with_auth(config, auth)
    }

    /// Creates a client around an existing session manager
    pub fn with_auth(config: Arc<Config>, auth: Arc<Auth>) -> AppResult<Self> {
        let http_client = build_http_client(&config)?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        Ok(Self {
            auth,
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Sends a request to the API
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the base URL, or an absolute URL
    /// * `params` - Query parameters
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// * `Ok(Some(Value))` - Parsed JSON body
    /// * `Ok(None)` - Successful response without a body
    /// * `Err(AppError)` - Exactly one typed error per failure
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        body: Option<&B>,
    ) -> AppResult<Option<Value>> {
        let token = self.auth.access_token().await?;
        let url = self.url(path);

        make_http_request(
            &self.http_client,
            &self.rate_limiter,
            method,
            &url,
            &token,
            params,
            body,
        )
        .await
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str, params: &[(String, String)]) -> AppResult<Option<Value>> {
        self.send(Method::GET, path, params, None::<&Value>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<Option<Value>> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<Option<Value>> {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> AppResult<Option<Value>> {
        self.send(Method::DELETE, path, &[], None::<&Value>).await
    }

    /// Session manager of this client
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Authentication mode of the underlying session
    pub async fn auth_mode(&self) -> AuthMode {
        self.auth.mode().await
    }

    /// Configuration this client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
