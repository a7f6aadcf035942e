//! Deployment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output of the upload step together with the tag extracted from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// Raw standard output of `aws deploy push`
    pub raw_output: String,

    /// Content tag (eTag) of the uploaded revision
    pub tag: String,
}

/// Response of `aws deploy create-deployment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentDescriptor {
    /// Deployment ID, `d-XXXXXXXX`
    pub deployment_id: String,
}

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentReport {
    /// Per-invocation identifier used in logs
    pub run_id: String,

    pub started_at: DateTime<Utc>,

    pub application: String,

    pub deployment_group: String,

    pub s3_location: String,

    /// Content tag of the deployed revision
    pub etag: String,

    pub deployment_id: String,
}
