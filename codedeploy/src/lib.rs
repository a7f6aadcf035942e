//! codedeploy-push library
//!
//! Uploads an application bundle with `aws deploy push` and creates an
//! AWS CodeDeploy deployment for the uploaded revision.

pub mod app;
pub mod deploy;
pub mod errors;
pub mod filesys;
pub mod logs;
pub mod models;
pub mod storage;
pub mod utils;
