/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::DEFAULT_TOKEN_LIFETIME_SECS;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Response of the OAuth2 token endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TokenResponse {
    /// Bearer access token
    pub access_token: String,
    /// Token type (typically "Bearer")
    #[serde(default)]
    pub token_type: Option<String>,
    /// Token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Granted scope
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    /// Instant at which the token stops being valid, counted from `issued_at`
    #[must_use]
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> DateTime<Utc> {
        let lifetime = self.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
        issued_at + Duration::seconds(lifetime)
    }
}

/// Form body of the client-credentials grant
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    /// Always `client_credentials`
    pub grant_type: &'a str,
    /// `tsg_id:<tenant>`
    pub scope: String,
}

impl<'a> TokenRequest<'a> {
    /// Client-credentials grant scoped to a tenant
    pub fn client_credentials(tenant_id: &str) -> Self {
        Self {
            grant_type: "client_credentials",
            scope: format!("tsg_id:{tenant_id}"),
        }
    }
}
