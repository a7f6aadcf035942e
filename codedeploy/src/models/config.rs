//! Deployment configuration

use serde::{Deserialize, Serialize};

use crate::errors::DeployError;

/// Target environment selected at invocation time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// Map the `--production` flag onto an environment
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
        }
    }
}

/// Deployment group names, one per environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentGroups {
    #[serde(default = "default_production_group")]
    pub production: String,

    #[serde(default = "default_development_group")]
    pub development: String,
}

fn default_production_group() -> String {
    "production".to_string()
}

fn default_development_group() -> String {
    "development".to_string()
}

impl Default for DeploymentGroups {
    fn default() -> Self {
        Self {
            production: default_production_group(),
            development: default_development_group(),
        }
    }
}

impl DeploymentGroups {
    /// Resolve the group name for an environment
    pub fn resolve(&self, environment: Environment) -> &str {
        match environment {
            Environment::Production => &self.production,
            Environment::Development => &self.development,
        }
    }
}

/// Immutable, fully populated deployment configuration.
///
/// Only [`ConfigurationBuilder::build`] creates one, so every instance has
/// passed validation. Field values are used verbatim in the generated
/// commands; nothing is shell-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    app_name: String,
    bucket: String,
    subdir: String,
    file_name: String,
    source: String,
    deploy_config: String,
    default_description: String,
    deployment_groups: DeploymentGroups,
    environment: Environment,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn subdir(&self) -> &str {
        &self.subdir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Local artifact path handed to `--source`
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn deploy_config(&self) -> &str {
        &self.deploy_config
    }

    pub fn default_description(&self) -> &str {
        &self.default_description
    }

    pub fn deployment_groups(&self) -> &DeploymentGroups {
        &self.deployment_groups
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Deployment group for the selected environment
    pub fn deployment_group(&self) -> &str {
        self.deployment_groups.resolve(self.environment)
    }

    /// `s3://<bucket>/<subdir>/<fileName>`
    pub fn s3_location(&self) -> String {
        format!("s3://{}/{}/{}", self.bucket, self.subdir, self.file_name)
    }
}

/// Builder for [`Configuration`]
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    app_name: Option<String>,
    bucket: Option<String>,
    subdir: Option<String>,
    file_name: Option<String>,
    source: Option<String>,
    deploy_config: Option<String>,
    default_description: Option<String>,
    deployment_groups: DeploymentGroups,
    environment: Environment,
}

impl ConfigurationBuilder {
    pub fn app_name(mut self, value: impl Into<String>) -> Self {
        self.app_name = Some(value.into());
        self
    }

    pub fn bucket(mut self, value: impl Into<String>) -> Self {
        self.bucket = Some(value.into());
        self
    }

    pub fn subdir(mut self, value: impl Into<String>) -> Self {
        self.subdir = Some(value.into());
        self
    }

    pub fn file_name(mut self, value: impl Into<String>) -> Self {
        self.file_name = Some(value.into());
        self
    }

    pub fn source(mut self, value: impl Into<String>) -> Self {
        self.source = Some(value.into());
        self
    }

    pub fn deploy_config(mut self, value: impl Into<String>) -> Self {
        self.deploy_config = Some(value.into());
        self
    }

    pub fn default_description(mut self, value: impl Into<String>) -> Self {
        self.default_description = Some(value.into());
        self
    }

    pub fn deployment_groups(mut self, groups: DeploymentGroups) -> Self {
        self.deployment_groups = groups;
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Validate and freeze the configuration
    pub fn build(self) -> Result<Configuration, DeployError> {
        let app_name = require_non_empty("app_name", self.app_name)?;
        let bucket = require_non_empty("bucket", self.bucket)?;
        let subdir = require("subdir", self.subdir)?;
        let file_name = require_non_empty("file_name", self.file_name)?;
        let source = require_non_empty("source", self.source)?;
        let deploy_config = require_non_empty("deploy_config", self.deploy_config)?;
        let default_description = require("default_description", self.default_description)?;

        for (environment, group) in [
            (Environment::Production, &self.deployment_groups.production),
            (Environment::Development, &self.deployment_groups.development),
        ] {
            if group.is_empty() {
                return Err(DeployError::Configuration(format!(
                    "deployment group for {} must not be empty",
                    environment
                )));
            }
        }

        Ok(Configuration {
            app_name,
            bucket,
            subdir,
            file_name,
            source,
            deploy_config,
            default_description,
            deployment_groups: self.deployment_groups,
            environment: self.environment,
        })
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, DeployError> {
    value.ok_or_else(|| DeployError::Configuration(format!("missing required field `{}`", field)))
}

fn require_non_empty(field: &str, value: Option<String>) -> Result<String, DeployError> {
    let value = require(field, value)?;
    if value.is_empty() {
        return Err(DeployError::Configuration(format!(
            "required field `{}` must not be empty",
            field
        )));
    }
    Ok(value)
}
