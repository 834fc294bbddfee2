/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Token request and response models
pub mod auth;
/// HTTP dispatch with rate limiting and error classification
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
