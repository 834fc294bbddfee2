/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the `_errors` array returned on failure
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorEntry {
    /// Server error code (e.g. "E003")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Structured details, usually `{"errorType": "..."}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorEntry {
    /// Reads one `_errors` entry, keeping whichever fields have the expected type
    fn from_value(entry: &Value) -> Self {
        Self {
            code: entry.get("code").and_then(Value::as_str).map(String::from),
            message: entry
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            details: entry.get("details").filter(|d| !d.is_null()).cloned(),
        }
    }

    /// The `details.errorType` string, when present
    #[must_use]
    pub fn error_type(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.get("errorType"))
            .and_then(Value::as_str)
    }
}

/// Structured error body returned by the API on any non-2xx response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorEnvelope {
    /// Ordered error entries; the first one is authoritative
    #[serde(rename = "_errors", default)]
    pub errors: Vec<ErrorEntry>,
    /// Request id for support correlation
    #[serde(rename = "_request_id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorEnvelope {
    /// Parses a response body, falling back to an empty envelope when the
    /// body is empty or not a JSON error envelope
    ///
    /// Fields are read one by one so an off-type member (a non-string
    /// `message`, say) does not discard the request id or `errorType`.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };
        let errors = value
            .get("_errors")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(ErrorEntry::from_value).collect())
            .unwrap_or_default();
        let request_id = value
            .get("_request_id")
            .and_then(Value::as_str)
            .map(String::from);

        Self { errors, request_id }
    }

    /// Envelope with a single entry
    #[must_use]
    pub fn single(message: &str, error_type: Option<&str>) -> Self {
        Self {
            errors: vec![ErrorEntry {
                code: None,
                message: message.to_string(),
                details: error_type.map(|t| serde_json::json!({ "errorType": t })),
            }],
            request_id: None,
        }
    }

    /// Sets the request id
    #[must_use]
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }

    /// The first entry, if any
    #[must_use]
    pub fn first(&self) -> Option<&ErrorEntry> {
        self.errors.first()
    }

    /// The first entry's message, if non-empty
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.first()
            .map(|e| e.message.as_str())
            .filter(|m| !m.is_empty())
    }

    /// The first entry's `details.errorType`
    #[must_use]
    pub fn error_type(&self) -> Option<&str> {
        self.first().and_then(ErrorEntry::error_type)
    }

    /// The first entry's raw details object
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.first().and_then(|e| e.details.as_ref())
    }
}

/// One page of a list response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourcePage<T> {
    /// Items in this page
    pub data: Vec<T>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: usize,
    /// Offset of the first item
    #[serde(default)]
    pub offset: usize,
    /// Total number of items the server holds
    #[serde(default)]
    pub total: usize,
}

/// Result of pushing the candidate configuration
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CommitResponse {
    /// Whether the push was accepted
    pub success: bool,
    /// Identifier of the job performing the push
    pub job_id: String,
    /// Server message
    #[serde(default)]
    pub message: String,
}

/// State of one job
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct JobStatusData {
    /// Job identifier
    pub id: String,
    /// Numeric job status ("0".."2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_status: Option<String>,
    /// Numeric job result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_result: Option<String>,
    /// Numeric job type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    /// Status label, `FIN` once the job is done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_str: Option<String>,
    /// Result label (`OK`, `FAIL`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_str: Option<String>,
    /// Job type label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_str: Option<String>,
    /// Completion percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<String>,
    /// Summary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Free-form details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Description supplied at commit time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent job id for child jobs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Administrator that started the job
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uname: Option<String>,
    /// Start timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ts: Option<String>,
    /// End timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ts: Option<String>,
}

impl JobStatusData {
    /// True once the job has finished, successfully or not
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status_str.as_deref() == Some("FIN")
    }
}

/// Response of the job status endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct JobStatusResponse {
    /// Matching jobs, normally exactly one
    #[serde(default)]
    pub data: Vec<JobStatusData>,
}

/// Response of the job list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct JobListResponse {
    /// Jobs in this page
    #[serde(default)]
    pub data: Vec<JobStatusData>,
    /// Page size
    #[serde(default)]
    pub limit: usize,
    /// Offset of the first job
    #[serde(default)]
    pub offset: usize,
    /// Total number of jobs
    #[serde(default)]
    pub total: usize,
}
