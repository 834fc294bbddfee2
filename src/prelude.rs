/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # SCM Client Prelude
//!
//! Re-exports the types most callers need.
//!
//! ```rust,ignore
//! use scm_client::prelude::*;
//!
//! let config = Config::with_bearer_token("token");
//! let client = Arc::new(Client::new(config).await?);
//! let tags = ResourceManager::<Tag>::new(client);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error taxonomy
pub use crate::error::{ApiErrorInfo, AppError, AppResult};

// ============================================================================
// AUTHENTICATION AND DISPATCH
// ============================================================================

/// Session management
pub use crate::application::auth::{Auth, AuthMode, Session};

/// Request dispatcher
pub use crate::application::client::Client;

/// Rate limiting
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::interfaces::{operations::OperationsService, resource::ResourceService};

/// Generic object manager
pub use crate::application::resource::{Resource, ResourceManager};

/// Containers and list options
pub use crate::application::container::{Container, ContainerKind, ContainerSelector};
pub use crate::application::filter::{FilterRule, FilterSpec, Filters, ListOptions};

// ============================================================================
// MODELS
// ============================================================================

/// Operation requests and responses
pub use crate::model::requests::{CommitRequest, JobListRequest};
pub use crate::model::responses::{
    CommitResponse, ErrorEnvelope, JobListResponse, JobStatusData, JobStatusResponse,
};

/// Configuration objects
pub use crate::presentation::{
    Address, PortSpec, Protocol, RecurringSchedule, Schedule, ScheduleType, Service, Tag,
    TimeoutOverride, WeeklySchedule,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for custom requests through [`Client::send`]
pub use reqwest::Method;
