//! One invocation of the tool

use std::sync::Arc;

use tracing::info;

use crate::app::options::Cli;
use crate::deploy::command::build_upload_command;
use crate::deploy::executor::DeployExecutor;
use crate::deploy::runner::{CommandRunner, ShellRunner};
use crate::errors::DeployError;
use crate::filesys::file::File;
use crate::models::deployment::DeploymentReport;
use crate::storage::settings::Settings;

/// What an invocation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `--print-upload-command`: the command that would have run
    UploadCommand(String),

    /// A deployment was created
    Deployed(DeploymentReport),
}

/// Read the settings file. A missing file yields empty settings, so the
/// missing fields are reported by the configuration check.
pub async fn load_settings(file: &File) -> Result<Settings, DeployError> {
    if !file.exists().await {
        return Ok(Settings::default());
    }
    file.read_json::<Settings>().await
}

/// Build a shell runner from the settings, with command-line overrides
pub fn shell_runner(cli: &Cli, settings: &Settings) -> ShellRunner {
    let mut runner = ShellRunner::new();
    if let Some(dir) = cli.working_dir.as_ref().or(settings.working_dir.as_ref()) {
        runner = runner.with_working_dir(dir);
    }
    if let Some(timeout) = cli.timeout().or(settings.command_timeout()) {
        runner = runner.with_timeout(timeout);
    }
    runner
}

/// Run the tool with the given command runner
pub async fn run(
    cli: &Cli,
    settings: &Settings,
    runner: Arc<dyn CommandRunner>,
) -> Result<RunOutcome, DeployError> {
    let config = settings.to_configuration(cli.environment(), cli.description.as_deref())?;

    if cli.print_upload_command {
        return Ok(RunOutcome::UploadCommand(build_upload_command(&config)));
    }

    info!(
        "Pushing {} for application {} ({})",
        config.file_name(),
        config.app_name(),
        config.environment()
    );
    let executor = DeployExecutor::new(config, runner);
    let report = executor.run().await?;
    Ok(RunOutcome::Deployed(report))
}
