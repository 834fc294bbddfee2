/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # SCM Client
//!
//! Async client for the Strata Cloud Manager configuration API.
//!
//! The crate is built around three pieces:
//!
//! - [`application::auth::Auth`] owns the session, either an OAuth2
//!   client-credentials token that refreshes itself or a static bearer token.
//! - [`application::client::Client`] dispatches requests, refreshes the session
//!   before a call when it is about to expire, and turns every failure into a
//!   typed [`error::AppError`].
//! - [`application::resource::ResourceManager`] implements the paginated
//!   list/fetch/filter protocol shared by every configuration object type.
//!
//! ## Example
//!
//! ```ignore
//! use scm_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Arc::new(Client::new(Config::new()).await?);
//!     let addresses = ResourceManager::<Address>::new(client.clone());
//!
//!     let all = addresses
//!         .list(&ContainerSelector::folder("Texas"), &ListOptions::default())
//!         .await?;
//!     info!("{} addresses", all.len());
//!     Ok(())
//! }
//! ```

/// Authentication, dispatch, configuration and the resource protocol
pub mod application;
/// Global constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// Wire-level request and response models
pub mod model;
/// Commonly used types
pub mod prelude;
/// Configuration object models
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
