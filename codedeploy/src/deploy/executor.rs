//! Push-and-deploy orchestrator

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, info_span, Instrument};

use crate::deploy::command::{build_deploy_command, build_upload_command, deploy_template};
use crate::deploy::fsm::{DeploymentEvent, DeploymentFsm, DeploymentState};
use crate::deploy::parse::{extract_deployment_id, extract_tag};
use crate::deploy::runner::{CommandOutput, CommandRunner};
use crate::errors::DeployError;
use crate::models::config::Configuration;
use crate::models::deployment::{DeploymentReport, UploadResult};
use crate::utils::generate_uuid;

/// Runs one upload followed by one deployment
pub struct DeployExecutor {
    config: Configuration,
    runner: Arc<dyn CommandRunner>,
    fsm: RwLock<DeploymentFsm>,
}

impl DeployExecutor {
    /// Create a new executor
    pub fn new(config: Configuration, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config,
            runner,
            fsm: RwLock::new(DeploymentFsm::new()),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Get the current run state
    pub async fn state(&self) -> DeploymentState {
        self.fsm.read().await.state()
    }

    /// Error message recorded when the run failed
    pub async fn error(&self) -> Option<String> {
        self.fsm.read().await.error().map(str::to_string)
    }

    /// Upload the bundle, create the deployment and report its ID.
    ///
    /// An executor runs once; a second call fails with a transition error.
    pub async fn run(&self) -> Result<DeploymentReport, DeployError> {
        let run_id = generate_uuid();
        let started_at = Utc::now();
        let span = info_span!("deploy", run_id = %run_id, app = %self.config.app_name());

        async {
            self.transition(DeploymentEvent::Upload).await?;
            let upload = self.step(self.upload()).await?;
            self.transition(DeploymentEvent::UploadSucceeded).await?;

            let deployment_group = self.config.deployment_group().to_string();
            info!(
                "Deploying revision {} to group {} ({})",
                upload.tag,
                deployment_group,
                self.config.environment()
            );
            self.transition(DeploymentEvent::Deploy).await?;
            let deployment_id = self.step(self.deploy(&upload, &deployment_group)).await?;
            self.transition(DeploymentEvent::DeploySucceeded).await?;

            info!("Deployment created: {}", deployment_id);
            Ok::<_, DeployError>(DeploymentReport {
                run_id: run_id.clone(),
                started_at,
                application: self.config.app_name().to_string(),
                deployment_group,
                s3_location: self.config.s3_location(),
                etag: upload.tag,
                deployment_id,
            })
        }
        .instrument(span)
        .await
    }

    async fn upload(&self) -> Result<UploadResult, DeployError> {
        let command = build_upload_command(&self.config);
        info!("Uploading {} to {}", self.config.source(), self.config.s3_location());

        let output = self.execute(&command).await?;
        let tag = extract_tag(&output.stdout)?;
        debug!("Upload tagged with eTag {}", tag);

        Ok(UploadResult {
            raw_output: output.stdout,
            tag,
        })
    }

    async fn deploy(
        &self,
        upload: &UploadResult,
        deployment_group: &str,
    ) -> Result<String, DeployError> {
        let template = deploy_template(&upload.raw_output);
        let command =
            build_deploy_command(Some(template), &self.config, deployment_group, &upload.tag)?;

        let output = self.execute(&command).await?;
        extract_deployment_id(&output.stdout)
    }

    async fn execute(&self, command: &str) -> Result<CommandOutput, DeployError> {
        let output = self.runner.run(command).await?;
        if !output.success() {
            return Err(DeployError::ExternalProcess {
                command: command.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output)
    }

    /// Await a step, moving the FSM to `Failed` if it errors
    async fn step<T>(
        &self,
        step: impl std::future::Future<Output = Result<T, DeployError>>,
    ) -> Result<T, DeployError> {
        match step.await {
            Ok(value) => Ok(value),
            Err(e) => {
                error!("Deployment run failed: {}", e);
                self.transition(DeploymentEvent::Failed(e.to_string()))
                    .await?;
                Err(e)
            }
        }
    }

    async fn transition(&self, event: DeploymentEvent) -> Result<(), DeployError> {
        let mut fsm = self.fsm.write().await;
        fsm.process(event).map_err(DeployError::Transition)
    }
}
