/// Session management for both authentication modes
pub mod auth;
/// Maps failed responses to typed errors
pub mod classifier;
/// Request dispatcher
pub mod client;
/// Application configuration module
pub mod config;
/// Container selectors
pub mod container;
/// In-memory list filters
pub mod filter;
/// Service interfaces
pub mod interfaces;
/// Commit and job operations
pub mod operations;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Generic configuration object manager
pub mod resource;
