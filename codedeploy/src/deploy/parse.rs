//! Extraction of values from AWS CLI output

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::DeployError;
use crate::models::deployment::DeploymentDescriptor;

/// `eTag="<value>"`, value being a maximal run of non-quote characters
const ETAG_PATTERN: &str = r#"eTag="([^"]*)""#;

static ETAG_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(ETAG_PATTERN).ok());

/// Content tag from the free-form output of `aws deploy push`.
///
/// The first `eTag="..."` occurrence wins.
pub fn extract_tag(text: &str) -> Result<String, DeployError> {
    let regex = ETAG_REGEX
        .as_ref()
        .ok_or_else(|| DeployError::Internal(format!("invalid eTag pattern {}", ETAG_PATTERN)))?;

    regex
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().to_string())
        .ok_or_else(|| DeployError::NotFound("no eTag=\"...\" in upload output".to_string()))
}

/// Parse the JSON printed by `aws deploy create-deployment`
pub fn parse_deployment(json_text: &str) -> Result<DeploymentDescriptor, DeployError> {
    let value: serde_json::Value =
        serde_json::from_str(json_text).map_err(|e| DeployError::Parse(e.to_string()))?;

    match value.get("deploymentId") {
        None | Some(serde_json::Value::Null) => {
            Err(DeployError::MissingField("deploymentId".to_string()))
        }
        Some(_) => serde_json::from_value(value).map_err(|e| DeployError::Parse(e.to_string())),
    }
}

/// Deployment ID from the JSON printed by `aws deploy create-deployment`
pub fn extract_deployment_id(json_text: &str) -> Result<String, DeployError> {
    parse_deployment(json_text).map(|descriptor| descriptor.deployment_id)
}
