/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Default base URL of the configuration REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.strata.paloaltonetworks.com";
/// Default OAuth2 token endpoint used for the client-credentials grant
pub const DEFAULT_TOKEN_URL: &str = "https://auth.apps.paloaltonetworks.com/am/oauth2/access_token";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "scm-client/0.1.0";
/// Seconds before the real expiry at which a token is already treated as expired
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 300;
/// Lifetime assumed for a token when the token endpoint omits `expires_in`
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 900;
/// Largest page size the API accepts for any list endpoint
pub const ABSOLUTE_MAX_LIMIT: usize = 5000;
/// Page size used by most resource types
pub const DEFAULT_MAX_LIMIT: usize = 2500;
/// Endpoint that pushes the candidate configuration
pub const COMMIT_ENDPOINT: &str = "/config/operations/v1/config-versions/candidate:push";
/// Endpoint that reports job state
pub const JOBS_ENDPOINT: &str = "/config/operations/v1/jobs";
/// Default seconds to wait for a job to finish
pub const DEFAULT_JOB_TIMEOUT_SECS: u64 = 300;
/// Default seconds between two job status polls
pub const DEFAULT_JOB_POLL_INTERVAL_SECS: u64 = 10;
/// Message returned when a bearer-token commit has no administrator list
pub const BEARER_COMMIT_ADMIN_REQUIRED: &str =
    "When using bearer token authentication, 'admin' must be provided for commit operations";
