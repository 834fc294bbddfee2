/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::JobListRequest;
use crate::model::responses::{CommitResponse, JobListResponse, JobStatusResponse};
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
/// Service for pushing the candidate configuration and tracking the resulting jobs
pub trait OperationsService: Send + Sync {
    /// Pushes the candidate configuration of `folders`
    ///
    /// # Arguments
    /// * `folders` - Folders to push; must not be empty
    /// * `description` - Commit description
    /// * `admin` - Administrators whose changes are pushed. Required for
    ///   bearer-token sessions; defaults to the client id otherwise
    /// * `sync` - Wait for the push job to finish before returning
    /// * `timeout` - Upper bound for the wait when `sync` is set
    async fn commit(
        &self,
        folders: &[String],
        description: &str,
        admin: Option<&[String]>,
        sync: bool,
        timeout: Option<Duration>,
    ) -> Result<CommitResponse, AppError>;

    /// Gets the status of one job
    async fn get_job_status(&self, job_id: &str) -> Result<JobStatusResponse, AppError>;

    /// Lists jobs, optionally keeping only children of one job
    async fn list_jobs(&self, request: &JobListRequest) -> Result<JobListResponse, AppError>;

    /// Polls a job until it finishes or `timeout` elapses
    async fn wait_for_job(
        &self,
        job_id: &str,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Result<JobStatusResponse, AppError>;
}
