//! Finite State Machine for a push-and-deploy run

use serde::{Deserialize, Serialize};

/// Run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentState {
    /// Nothing started yet
    Idle,

    /// `aws deploy push` running
    Uploading,

    /// Bundle uploaded and tag extracted
    Uploaded,

    /// `aws deploy create-deployment` running
    Deploying,

    /// Deployment created
    Deployed,

    /// Run failed
    Failed,
}

impl DeploymentState {
    /// Whether no further event is accepted
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeploymentState::Deployed | DeploymentState::Failed)
    }
}

/// Run event
#[derive(Debug, Clone)]
pub enum DeploymentEvent {
    /// Start the upload
    Upload,

    /// Upload finished and its tag was extracted
    UploadSucceeded,

    /// Start the deployment
    Deploy,

    /// Deployment ID extracted
    DeploySucceeded,

    /// A step failed
    Failed(String),
}

/// Run FSM
#[derive(Debug, Clone)]
pub struct DeploymentFsm {
    state: DeploymentState,
    error: Option<String>,
}

impl DeploymentFsm {
    /// Create a new FSM in idle state
    pub fn new() -> Self {
        Self {
            state: DeploymentState::Idle,
            error: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> DeploymentState {
        self.state
    }

    /// Get error message if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Process an event and transition state
    pub fn process(&mut self, event: DeploymentEvent) -> Result<(), String> {
        let new_state = match (&self.state, &event) {
            (DeploymentState::Idle, DeploymentEvent::Upload) => DeploymentState::Uploading,
            (DeploymentState::Uploading, DeploymentEvent::UploadSucceeded) => {
                DeploymentState::Uploaded
            }
            (DeploymentState::Uploaded, DeploymentEvent::Deploy) => DeploymentState::Deploying,
            (DeploymentState::Deploying, DeploymentEvent::DeploySucceeded) => {
                DeploymentState::Deployed
            }

            // Any non-terminal state may fail
            (state, DeploymentEvent::Failed(err)) if !state.is_terminal() => {
                self.error = Some(err.clone());
                DeploymentState::Failed
            }

            // Invalid transitions
            (state, event) => {
                return Err(format!("Invalid transition: {:?} -> {:?}", state, event));
            }
        };

        self.state = new_state;
        Ok(())
    }
}

impl Default for DeploymentFsm {
    fn default() -> Self {
        Self::new()
    }
}
