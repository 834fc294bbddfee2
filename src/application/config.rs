/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_URL};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the configuration API
pub struct Credentials {
    /// OAuth2 client id (service account)
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Tenant service group id the token is scoped to
    pub tenant_id: String,
    /// Pre-obtained bearer token; when set, the client never refreshes
    pub access_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the REST API
    pub base_url: String,
    /// OAuth2 token endpoint
    pub token_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            period_seconds: 60,
            burst_size: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token: Option<String> = get_env_or_none("SCM_ACCESS_TOKEN");
        let client_id = get_env_or_default("SCM_CLIENT_ID", String::new());
        let client_secret = get_env_or_default("SCM_CLIENT_SECRET", String::new());
        let tenant_id = get_env_or_default("SCM_TSG_ID", String::new());

        if access_token.is_none() {
            if client_id.is_empty() {
                error!("SCM_CLIENT_ID not found in environment variables or .env file");
            }
            if client_secret.is_empty() {
                error!("SCM_CLIENT_SECRET not found in environment variables or .env file");
            }
            if tenant_id.is_empty() {
                error!("SCM_TSG_ID not found in environment variables or .env file");
            }
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
                tenant_id,
                access_token,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("SCM_API_BASE_URL", DEFAULT_API_BASE_URL.to_string()),
                token_url: get_env_or_default("SCM_TOKEN_URL", DEFAULT_TOKEN_URL.to_string()),
                timeout: get_env_or_default("SCM_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("SCM_RATE_LIMIT_MAX_REQUESTS", 100),
                period_seconds: get_env_or_default("SCM_RATE_LIMIT_PERIOD_SECONDS", 60),
                burst_size: get_env_or_default("SCM_RATE_LIMIT_BURST_SIZE", 50),
            },
        }
    }

    /// Configuration for the OAuth2 client-credentials flow
    pub fn with_credentials(client_id: &str, client_secret: &str, tenant_id: &str) -> Self {
        Self {
            credentials: Credentials {
                client_id: client_id.to_string(),
                client_secret: client_secret.to_string(),
                tenant_id: tenant_id.to_string(),
                access_token: None,
            },
            rest_api: RestApiConfig::default(),
            rate_limiter: RateLimiterConfig::default(),
        }
    }

    /// Configuration for a static bearer token
    pub fn with_bearer_token(token: &str) -> Self {
        Self {
            credentials: Credentials {
                access_token: Some(token.to_string()),
                ..Credentials::default()
            },
            rest_api: RestApiConfig::default(),
            rate_limiter: RateLimiterConfig::default(),
        }
    }

    /// Overrides the API base URL
    #[must_use]
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the OAuth2 token endpoint
    #[must_use]
    pub fn token_url(mut self, token_url: &str) -> Self {
        self.rest_api.token_url = token_url.to_string();
        self
    }

    /// Overrides the request timeout in seconds
    #[must_use]
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// True when a static bearer token is configured
    #[must_use]
    pub fn is_bearer(&self) -> bool {
        self.credentials.access_token.is_some()
    }
}
