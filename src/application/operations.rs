/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::auth::AuthMode;
use crate::application::client::Client;
use crate::application::interfaces::operations::OperationsService;
use crate::constants::{
    BEARER_COMMIT_ADMIN_REQUIRED, COMMIT_ENDPOINT, DEFAULT_JOB_POLL_INTERVAL_SECS,
    DEFAULT_JOB_TIMEOUT_SECS, JOBS_ENDPOINT,
};
use crate::error::{AppError, AppResult};
use crate::model::requests::{CommitRequest, JobListRequest};
use crate::model::responses::{CommitResponse, JobListResponse, JobStatusResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

fn decode<T: DeserializeOwned>(value: Option<Value>) -> AppResult<T> {
    let value = value.ok_or_else(|| AppError::api("Invalid response format: empty response"))?;
    Ok(serde_json::from_value(value)?)
}

impl Client {
    /// Administrators a commit applies to.
    ///
    /// An explicit non-empty list wins. Otherwise client-credentials sessions
    /// use their client id and bearer sessions fail, since they carry no identity.
    async fn resolve_commit_admin(&self, admin: Option<&[String]>) -> AppResult<Vec<String>> {
        if let Some(admin) = admin.filter(|a| !a.is_empty()) {
            return Ok(admin.to_vec());
        }
        match self.auth_mode().await {
            AuthMode::Bearer => Err(AppError::api(BEARER_COMMIT_ADMIN_REQUIRED)),
            AuthMode::Credentials => {
                let client_id = self.auth().client_id().ok_or_else(|| {
                    AppError::Configuration("client_id is required to infer the commit admin".to_string())
                })?;
                Ok(vec![client_id.to_string()])
            }
        }
    }
}

#[async_trait]
impl OperationsService for Client {
    async fn commit(
        &self,
        folders: &[String],
        description: &str,
        admin: Option<&[String]>,
        sync: bool,
        timeout: Option<Duration>,
    ) -> Result<CommitResponse, AppError> {
        if folders.is_empty() {
            return Err(AppError::MissingParameter(
                "Field 'folders' must contain at least one folder".to_string(),
            ));
        }
        let admin = self.resolve_commit_admin(admin).await?;

        let request = CommitRequest::new(folders.to_vec(), admin, description);
        info!("Committing folders {:?}", request.folders);
        let mut response: CommitResponse = decode(self.post(COMMIT_ENDPOINT, &request).await?)?;
        info!("Commit accepted, job {}", response.job_id);

        if sync && response.success && !response.job_id.is_empty() {
            let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_JOB_TIMEOUT_SECS));
            let status = self
                .wait_for_job(
                    &response.job_id,
                    timeout,
                    Duration::from_secs(DEFAULT_JOB_POLL_INTERVAL_SECS),
                )
                .await?;
            let result = status
                .data
                .first()
                .and_then(|job| job.result_str.clone())
                .unwrap_or_else(|| "UNKNOWN".to_string());
            response.success = result != "FAIL";
            response.message = format!("Commit job {} completed: {}", response.job_id, result);
        }

        Ok(response)
    }

    async fn get_job_status(&self, job_id: &str) -> Result<JobStatusResponse, AppError> {
        if job_id.is_empty() {
            return Err(AppError::MissingParameter(
                "Field 'job_id' is not allowed to be empty".to_string(),
            ));
        }
        let path = format!("{JOBS_ENDPOINT}/{job_id}");
        decode(self.get(&path, &[]).await?)
    }

    async fn list_jobs(&self, request: &JobListRequest) -> Result<JobListResponse, AppError> {
        let mut response: JobListResponse = decode(self.get(JOBS_ENDPOINT, &request.query()).await?)?;

        if let Some(parent_id) = &request.parent_id {
            response
                .data
                .retain(|job| job.parent_id.as_deref() == Some(parent_id.as_str()));
            response.total = response.data.len();
        }
        Ok(response)
    }

    async fn wait_for_job(
        &self,
        job_id: &str,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Result<JobStatusResponse, AppError> {
        let started = Instant::now();
        loop {
            let status = self.get_job_status(job_id).await?;
            if status.data.first().is_some_and(|job| job.is_finished()) {
                debug!("Job {} finished", job_id);
                return Ok(status);
            }
            if started.elapsed() >= timeout {
                warn!("Gave up waiting for job {} after {:?}", job_id, timeout);
                return Err(AppError::api(format!("Timeout waiting for job {job_id}")));
            }
            tokio::time::sleep(poll_interval).await;
        }
    }
}
