/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error taxonomy for the SCM client.
//!
//! Remote failures carry an [`ApiErrorInfo`] with the server message, the
//! `_request_id` for support correlation, the HTTP status and the raw
//! `details` object. Client-side failures (bad arguments) are detected before
//! any request is sent and carry only a message.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Context attached to every error produced from a remote response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorInfo {
    /// Human-readable message, taken from the first entry of the error envelope
    pub message: String,
    /// Request id reported by the server, if any
    pub request_id: Option<String>,
    /// HTTP status code of the failed response, if a response was received
    pub http_status_code: Option<u16>,
    /// Raw `details` object of the first envelope entry
    pub details: Option<Value>,
}

impl ApiErrorInfo {
    /// Creates an error context with just a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Sets the HTTP status code
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status_code = Some(status);
        self
    }

    /// Sets the request id
    #[must_use]
    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Sets the details object
    #[must_use]
    pub fn with_details(mut self, details: Option<Value>) -> Self {
        self.details = details;
        self
    }
}

impl fmt::Display for ApiErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid constructor or setter arguments
    #[error("{0}")]
    Configuration(String),
    /// A required parameter was given as an empty value
    #[error("{0}")]
    MissingParameter(String),
    /// A parameter had a value that cannot be sent as given
    #[error("{0}")]
    InvalidParameter(String),
    /// Container selector did not name exactly one container
    #[error("{0}")]
    InvalidContainer(String),
    /// A list filter had an unknown key or a value of the wrong type
    #[error("{0}")]
    InvalidFilter(String),
    /// 401 from the API or a rejected token request
    #[error("{0}")]
    Authentication(ApiErrorInfo),
    /// 403
    #[error("{0}")]
    Authorization(ApiErrorInfo),
    /// Generic 400
    #[error("{0}")]
    BadRequest(ApiErrorInfo),
    /// 400 with `errorType` "Object Already Exists"
    #[error("{0}")]
    ObjectAlreadyExists(ApiErrorInfo),
    /// 409 with `errorType` "Name Not Unique"
    #[error("{0}")]
    NameNotUnique(ApiErrorInfo),
    /// Generic 409
    #[error("{0}")]
    Conflict(ApiErrorInfo),
    /// 409 with `errorType` "Reference Not Zero": the object is still referenced
    #[error("{0}")]
    ReferenceNotZero(ApiErrorInfo),
    /// 404, or a fetch that matched nothing
    #[error("{0}")]
    NotFound(ApiErrorInfo),
    /// 405
    #[error("{0}")]
    MethodNotAllowed(ApiErrorInfo),
    /// 501
    #[error("{0}")]
    VersionNotSupported(ApiErrorInfo),
    /// 504
    #[error("{0}")]
    SessionTimeout(ApiErrorInfo),
    /// Transport failures, unparseable bodies and unmapped status codes
    #[error("{0}")]
    Api(ApiErrorInfo),
}

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Creates a catch-all API error with a plain message
    pub fn api(message: impl Into<String>) -> Self {
        AppError::Api(ApiErrorInfo::new(message))
    }

    /// Remote error context, `None` for client-side errors
    #[must_use]
    pub fn info(&self) -> Option<&ApiErrorInfo> {
        match self {
            AppError::Configuration(_)
            | AppError::MissingParameter(_)
            | AppError::InvalidParameter(_)
            | AppError::InvalidContainer(_)
            | AppError::InvalidFilter(_) => None,
            AppError::Authentication(info)
            | AppError::Authorization(info)
            | AppError::BadRequest(info)
            | AppError::ObjectAlreadyExists(info)
            | AppError::NameNotUnique(info)
            | AppError::Conflict(info)
            | AppError::ReferenceNotZero(info)
            | AppError::NotFound(info)
            | AppError::MethodNotAllowed(info)
            | AppError::VersionNotSupported(info)
            | AppError::SessionTimeout(info)
            | AppError::Api(info) => Some(info),
        }
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Request id reported by the server
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.info().and_then(|i| i.request_id.as_deref())
    }

    /// HTTP status code of the failed response
    #[must_use]
    pub fn http_status_code(&self) -> Option<u16> {
        self.info().and_then(|i| i.http_status_code)
    }

    /// Raw `details` object from the error envelope
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.info().and_then(|i| i.details.as_ref())
    }

    /// True for every 409 variant
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            AppError::Conflict(_) | AppError::NameNotUnique(_) | AppError::ReferenceNotZero(_)
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::api(format!("API request failed: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::api(format!("Invalid response format: {e}"))
    }
}
