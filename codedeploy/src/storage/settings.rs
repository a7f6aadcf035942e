//! Settings file management

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::DeployError;
use crate::logs::LogLevel;
use crate::models::config::{Configuration, DeploymentGroups, Environment};

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE_NAME: &str = "codedeploy.json";

/// Contents of the settings file.
///
/// Deployment fields are optional here; whether they are present is
/// checked when the [`Configuration`] is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// CodeDeploy application name
    #[serde(default)]
    pub app_name: Option<String>,

    /// S3 bucket receiving the bundle
    #[serde(default)]
    pub bucket: Option<String>,

    /// Key prefix inside the bucket
    #[serde(default)]
    pub subdir: Option<String>,

    /// Bundle file name
    #[serde(default)]
    pub file_name: Option<String>,

    /// Local directory or archive to push
    #[serde(default)]
    pub source: Option<String>,

    /// Deployment configuration, e.g. `CodeDeployDefault.OneAtATime`
    #[serde(default)]
    pub deploy_config: Option<String>,

    /// Description used when none is given on the command line
    #[serde(default)]
    pub default_description: Option<String>,

    /// Group names for production and development
    #[serde(default)]
    pub deployment_groups: DeploymentGroups,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Directory the AWS CLI is run from
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Per-command timeout in seconds
    #[serde(default)]
    pub command_timeout_secs: Option<u64>,
}

impl Settings {
    /// Build the deployment configuration for one invocation.
    ///
    /// `description` replaces the default description when given.
    pub fn to_configuration(
        &self,
        environment: Environment,
        description: Option<&str>,
    ) -> Result<Configuration, DeployError> {
        let mut builder = Configuration::builder()
            .deployment_groups(self.deployment_groups.clone())
            .environment(environment);

        if let Some(value) = &self.app_name {
            builder = builder.app_name(value);
        }
        if let Some(value) = &self.bucket {
            builder = builder.bucket(value);
        }
        if let Some(value) = &self.subdir {
            builder = builder.subdir(value);
        }
        if let Some(value) = &self.file_name {
            builder = builder.file_name(value);
        }
        if let Some(value) = &self.source {
            builder = builder.source(value);
        }
        if let Some(value) = &self.deploy_config {
            builder = builder.deploy_config(value);
        }
        if let Some(value) = description.or(self.default_description.as_deref()) {
            builder = builder.default_description(value);
        }

        builder.build()
    }

    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }
}
