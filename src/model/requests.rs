/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Body of a candidate configuration push
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CommitRequest {
    /// Folders whose changes are pushed
    pub folders: Vec<String>,
    /// Administrators whose changes are pushed
    pub admin: Vec<String>,
    /// Commit description
    pub description: String,
}

impl CommitRequest {
    /// Creates a commit request
    pub fn new(folders: Vec<String>, admin: Vec<String>, description: &str) -> Self {
        Self {
            folders,
            admin,
            description: description.to_string(),
        }
    }
}

/// Query parameters of the job list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobListRequest {
    /// Page size
    pub limit: usize,
    /// Offset of the first job
    pub offset: usize,
    /// Keep only children of this job
    #[serde(skip)]
    pub parent_id: Option<String>,
}

impl Default for JobListRequest {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            parent_id: None,
        }
    }
}

impl JobListRequest {
    /// Set the page size
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the offset
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Only keep children of the given job
    pub fn with_parent_id(mut self, parent_id: &str) -> Self {
        self.parent_id = Some(parent_id.to_string());
        self
    }

    /// Query pairs sent to the server
    #[must_use]
    pub fn query(&self) -> Vec<(String, String)> {
        vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ]
    }
}
