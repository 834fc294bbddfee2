/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Commit and job interface
pub mod operations;
/// Configuration object interface
pub mod resource;
