//! codedeploy-push - Entry Point
//!
//! Pushes a bundle to S3 and starts a CodeDeploy deployment from a build
//! pipeline, then prints the deployment ID.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use colored::*;
use tracing::{error, warn};

use codedeploy_push::app::options::Cli;
use codedeploy_push::app::run::{load_settings, run, shell_runner, RunOutcome};
use codedeploy_push::filesys::file::File;
use codedeploy_push::logs::{init_logging, LogOptions};
use codedeploy_push::utils::version_info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Print version and exit
    if cli.version {
        match serde_json::to_string_pretty(&version_info()) {
            Ok(version) => println!("{}", version),
            Err(e) => eprintln!("Failed to render version: {e}"),
        }
        return;
    }

    if let Err(e) = run_cli(&cli).await {
        error!("{:#}", e);
        eprintln!("{} {:#}", "Error:".bold().red(), e);
        std::process::exit(1);
    }
}

async fn run_cli(cli: &Cli) -> anyhow::Result<()> {
    let settings_file = File::new(&cli.settings);
    let settings = load_settings(&settings_file)
        .await
        .with_context(|| format!("Failed to load settings from {}", cli.settings.display()))?;

    // Initialize logging
    let log_options = LogOptions {
        log_level: cli.log_level.unwrap_or(settings.log_level),
        json_format: cli.json_logs,
    };
    if let Err(e) = init_logging(log_options) {
        eprintln!("Failed to initialize logging: {e}");
    }
    if !settings_file.exists().await {
        warn!("Settings file not found: {}", cli.settings.display());
    }

    let runner = Arc::new(shell_runner(cli, &settings));
    match run(cli, &settings, runner).await? {
        RunOutcome::UploadCommand(command) => println!("{}", command),
        RunOutcome::Deployed(report) => {
            println!(
                "{} {}",
                "Deployment created:".bold().green(),
                report.deployment_id.bold()
            );
            println!("  application:      {}", report.application);
            println!("  deployment group: {}", report.deployment_group);
            println!("  revision:         {} (eTag {})", report.s3_location, report.etag);
            println!("  started:          {}", report.started_at.to_rfc3339());
        }
    }

    Ok(())
}
