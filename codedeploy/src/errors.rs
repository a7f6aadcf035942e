//! Error types for codedeploy-push

use thiserror::Error;

/// Main error type for a push-and-deploy run
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Command `{command}` exited with {}: {stderr}", exit_code_label(.exit_code))]
    ExternalProcess {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Command `{command}` timed out after {secs}s")]
    Timeout { command: String, secs: u64 },

    #[error("Invalid transition: {0}")]
    Transition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Stable tag for each error variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    InvalidArgument,
    ExternalProcess,
    NotFound,
    Parse,
    MissingField,
    Timeout,
    Transition,
    Io,
    Internal,
}

impl DeployError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeployError::Configuration(_) => ErrorKind::Configuration,
            DeployError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            DeployError::ExternalProcess { .. } => ErrorKind::ExternalProcess,
            DeployError::NotFound(_) => ErrorKind::NotFound,
            DeployError::Parse(_) => ErrorKind::Parse,
            DeployError::MissingField(_) => ErrorKind::MissingField,
            DeployError::Timeout { .. } => ErrorKind::Timeout,
            DeployError::Transition(_) => ErrorKind::Transition,
            DeployError::Io(_) => ErrorKind::Io,
            DeployError::Internal(_) => ErrorKind::Internal,
        }
    }
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl From<anyhow::Error> for DeployError {
    fn from(err: anyhow::Error) -> Self {
        DeployError::Internal(err.to_string())
    }
}
