/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Maps an HTTP status and its error envelope to a typed [`AppError`].
//!
//! The first envelope entry supplies the message; `details.errorType`
//! disambiguates statuses that cover several conditions (400 and 409).

use crate::error::{ApiErrorInfo, AppError};
use crate::model::responses::ErrorEnvelope;
use reqwest::StatusCode;

/// `errorType` of a 400 raised when creating a duplicate object
pub const ERROR_TYPE_OBJECT_EXISTS: &str = "Object Already Exists";
/// `errorType` of a 409 raised when deleting a referenced object
pub const ERROR_TYPE_REFERENCE_NOT_ZERO: &str = "Reference Not Zero";
/// `errorType` of a 409 raised on a duplicate name
pub const ERROR_TYPE_NAME_NOT_UNIQUE: &str = "Name Not Unique";

/// Classifies a failed response.
///
/// # Arguments
/// * `status` - HTTP status code of the response
/// * `envelope` - Parsed error body, empty when the body was not an envelope
///
/// # Returns
/// The typed error the dispatcher raises
#[must_use]
pub fn classify(status: u16, envelope: &ErrorEnvelope) -> AppError {
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown error");
    let message = envelope.message().unwrap_or(reason);

    let info = ApiErrorInfo::new(message)
        .with_status(status)
        .with_request_id(envelope.request_id.clone())
        .with_details(envelope.details().cloned());

    match (status, envelope.error_type()) {
        (400, Some(ERROR_TYPE_OBJECT_EXISTS)) => AppError::ObjectAlreadyExists(info),
        (400, _) => AppError::BadRequest(info),
        (401, _) => AppError::Authentication(info),
        (403, _) => AppError::Authorization(info),
        (404, _) => AppError::NotFound(info),
        (405, _) => AppError::MethodNotAllowed(info),
        (409, Some(ERROR_TYPE_REFERENCE_NOT_ZERO)) => AppError::ReferenceNotZero(info),
        (409, Some(ERROR_TYPE_NAME_NOT_UNIQUE)) => AppError::NameNotUnique(info),
        (409, _) => AppError::Conflict(info),
        (501, _) => AppError::VersionNotSupported(info),
        (504, _) => AppError::SessionTimeout(info),
        _ => AppError::Api(ApiErrorInfo {
            message: format!("HTTP {status}: {message}"),
            ..info
        }),
    }
}
