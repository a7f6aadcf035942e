//! FSM unit tests

use codedeploy_push::deploy::fsm::{DeploymentEvent, DeploymentFsm, DeploymentState};

#[test]
fn test_fsm_initial_state() {
    let fsm = DeploymentFsm::new();
    assert_eq!(fsm.state(), DeploymentState::Idle);
    assert!(fsm.error().is_none());
}

#[test]
fn test_fsm_success_flow() {
    let mut fsm = DeploymentFsm::new();

    // Idle -> Uploading -> Uploaded
    fsm.process(DeploymentEvent::Upload).unwrap();
    fsm.process(DeploymentEvent::UploadSucceeded).unwrap();
    assert_eq!(fsm.state(), DeploymentState::Uploaded);

    // Uploaded -> Deploying -> Deployed
    fsm.process(DeploymentEvent::Deploy).unwrap();
    assert_eq!(fsm.state(), DeploymentState::Deploying);
    fsm.process(DeploymentEvent::DeploySucceeded).unwrap();
    assert_eq!(fsm.state(), DeploymentState::Deployed);
    assert!(fsm.state().is_terminal());
}

#[test]
fn test_fsm_fails_from_every_active_state() {
    let paths: Vec<Vec<DeploymentEvent>> = vec![
        vec![],
        vec![DeploymentEvent::Upload],
        vec![DeploymentEvent::Upload, DeploymentEvent::UploadSucceeded],
        vec![
            DeploymentEvent::Upload,
            DeploymentEvent::UploadSucceeded,
            DeploymentEvent::Deploy,
        ],
    ];

    for path in paths {
        let mut fsm = DeploymentFsm::new();
        for event in path {
            fsm.process(event).unwrap();
        }
        fsm.process(DeploymentEvent::Failed("boom".to_string())).unwrap();
        assert_eq!(fsm.state(), DeploymentState::Failed);
        assert_eq!(fsm.error(), Some("boom"));
    }
}

#[test]
fn test_fsm_no_way_out_of_failed() {
    let mut fsm = DeploymentFsm::new();
    fsm.process(DeploymentEvent::Upload).unwrap();
    fsm.process(DeploymentEvent::Failed("upload failed".to_string())).unwrap();

    assert!(fsm.process(DeploymentEvent::Upload).is_err());
    assert!(fsm.process(DeploymentEvent::Deploy).is_err());
    assert!(fsm.process(DeploymentEvent::Failed("again".to_string())).is_err());
    assert_eq!(fsm.error(), Some("upload failed"));
}

#[test]
fn test_fsm_invalid_transition() {
    let mut fsm = DeploymentFsm::new();

    // Cannot deploy before uploading
    assert!(fsm.process(DeploymentEvent::Deploy).is_err());
    assert_eq!(fsm.state(), DeploymentState::Idle);
}
