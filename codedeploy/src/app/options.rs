//! Command-line options

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::logs::LogLevel;
use crate::models::config::Environment;
use crate::storage::settings::SETTINGS_FILE_NAME;

/// Push a bundle to S3 and start an AWS CodeDeploy deployment
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "codedeploy-push", disable_version_flag = true)]
pub struct Cli {
    /// Deploy to the production group instead of development
    #[arg(long)]
    pub production: bool,

    /// Deployment description, replaces `default_description` from the settings file
    #[arg(short, long)]
    pub description: Option<String>,

    /// Settings file
    #[arg(long, value_name = "PATH", default_value = SETTINGS_FILE_NAME)]
    pub settings: PathBuf,

    /// Directory to run the AWS CLI from
    #[arg(long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Kill an AWS CLI call that runs longer than this
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Print the upload command and exit without running anything
    #[arg(long)]
    pub print_upload_command: bool,

    /// Print version information as JSON
    #[arg(short = 'V', long)]
    pub version: bool,
}

impl Cli {
    pub fn environment(&self) -> Environment {
        Environment::from_production_flag(self.production)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
