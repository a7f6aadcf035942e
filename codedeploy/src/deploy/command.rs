//! Command line construction for the AWS CodeDeploy CLI

use tracing::debug;

use crate::errors::DeployError;
use crate::models::config::Configuration;

/// Executable and subcommand of the upload step
pub const PUSH_COMMAND: &str = "aws deploy push";

/// Prefix of the deploy command suggested by `aws deploy push`
pub const CREATE_DEPLOYMENT_COMMAND: &str = "aws deploy create-deployment";

pub const DEPLOYMENT_GROUP_PLACEHOLDER: &str = "<deployment-group-name>";
pub const DEPLOYMENT_CONFIG_PLACEHOLDER: &str = "<deployment-config-name>";
pub const DESCRIPTION_PLACEHOLDER: &str = "<description>";

/// Render the `aws deploy push` command.
///
/// Values are substituted verbatim. Only the description is wrapped in
/// double quotes; shell safety of the values is the caller's concern.
pub fn build_upload_command(config: &Configuration) -> String {
    [
        PUSH_COMMAND.to_string(),
        format!("--application-name {}", config.app_name()),
        format!("--s3-location {}", config.s3_location()),
        format!("--description \"{}\"", config.default_description()),
        format!("--source {}", config.source()),
    ]
    .join(" ")
}

/// Fill the placeholders of a deploy command template.
///
/// `template` is the command printed by a successful upload and already
/// carries the bucket, key and `tag`. Every occurrence of each placeholder
/// is replaced.
pub fn build_deploy_command(
    template: Option<&str>,
    config: &Configuration,
    deployment_group: &str,
    tag: &str,
) -> Result<String, DeployError> {
    let template = match template {
        Some(template) if !template.is_empty() => template,
        _ => {
            return Err(DeployError::InvalidArgument(
                "deploy command template is missing; it must come from a successful upload"
                    .to_string(),
            ))
        }
    };

    debug!("Filling deploy command template for eTag {:?}", tag);
    let command = template
        .replace(DEPLOYMENT_GROUP_PLACEHOLDER, deployment_group)
        .replace(DEPLOYMENT_CONFIG_PLACEHOLDER, config.deploy_config())
        .replace(
            DESCRIPTION_PLACEHOLDER,
            &format!("\"{}\"", config.default_description()),
        );

    Ok(command)
}

/// Cut the deploy command template out of the upload output.
///
/// `aws deploy push` prints a short preamble before the suggested
/// `aws deploy create-deployment` line; that line is the template. Output
/// without the marker is returned whole, trimmed.
pub fn deploy_template(upload_output: &str) -> &str {
    match upload_output.find(CREATE_DEPLOYMENT_COMMAND) {
        Some(start) => {
            let rest = &upload_output[start..];
            rest.lines().next().unwrap_or(rest).trim_end()
        }
        None => upload_output.trim(),
    }
}
