//! Command building and response parsing tests

use codedeploy_push::deploy::command::{build_deploy_command, build_upload_command, deploy_template};
use codedeploy_push::deploy::parse::{extract_deployment_id, extract_tag, parse_deployment};
use codedeploy_push::errors::ErrorKind;
use codedeploy_push::models::config::{Configuration, Environment};

const TAG: &str = "8ba1946a3a15fa95566af19328577710";

fn fake_config(environment: Environment) -> Configuration {
    Configuration::builder()
        .app_name("fakeApp")
        .bucket("fakeApp")
        .subdir("fakeDirectory")
        .file_name("file.zip")
        .source("dist")
        .deploy_config("CodeDeployDefault.OneAtATime")
        .default_description("No description set")
        .environment(environment)
        .build()
        .unwrap()
}

fn suggested_command() -> String {
    format!(
        "aws deploy create-deployment --application-name asi-plm \
         --s3-location bucket=asi-webdev-codedeploy,key=plm/plm-v0.1.0.zip,bundleType=zip,eTag=\"{}\" \
         --deployment-group-name <deployment-group-name> \
         --deployment-config-name <deployment-config-name> --description <description>",
        TAG
    )
}

#[test]
fn test_upload_command() {
    let command = build_upload_command(&fake_config(Environment::Development));
    assert_eq!(
        command,
        "aws deploy push --application-name fakeApp --s3-location s3://fakeApp/fakeDirectory/file.zip --description \"No description set\" --source dist"
    );

    for flag in ["--application-name", "--s3-location", "--description", "--source"] {
        assert_eq!(command.matches(flag).count(), 1, "{}", flag);
    }
}

#[test]
fn test_deploy_command_fills_placeholders() {
    let config = fake_config(Environment::Development);
    let command =
        build_deploy_command(Some(&suggested_command()), &config, config.deployment_group(), TAG)
            .unwrap();

    assert_eq!(
        command,
        format!(
            "aws deploy create-deployment --application-name asi-plm \
             --s3-location bucket=asi-webdev-codedeploy,key=plm/plm-v0.1.0.zip,bundleType=zip,eTag=\"{}\" \
             --deployment-group-name development \
             --deployment-config-name CodeDeployDefault.OneAtATime --description \"No description set\"",
            TAG
        )
    );
}

#[test]
fn test_deploy_command_replaces_every_occurrence() {
    let config = fake_config(Environment::Production);
    let template = "<description> <deployment-group-name> <description> <deployment-group-name>";

    let command =
        build_deploy_command(Some(template), &config, config.deployment_group(), TAG).unwrap();

    assert_eq!(
        command,
        "\"No description set\" production \"No description set\" production"
    );
}

#[test]
fn test_deploy_command_missing_template() {
    let config = fake_config(Environment::Development);
    let err = build_deploy_command(None, &config, "development", TAG).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_upload_output_yields_tag_and_template() {
    let output = format!("To deploy with this revision, run:\n{}\n", suggested_command());

    let tag = extract_tag(&output).unwrap();
    assert_eq!(tag, TAG);
    assert_eq!(deploy_template(&output), suggested_command());
}

#[test]
fn test_extract_tag_not_found() {
    assert_eq!(extract_tag("").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(extract_tag("eTag=unquoted").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_deployment_id() {
    assert_eq!(
        extract_deployment_id(r#"{"deploymentId":"d-VFY9K81UF"}"#).unwrap(),
        "d-VFY9K81UF"
    );
    assert_eq!(extract_deployment_id("not json").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(extract_deployment_id("{}").unwrap_err().kind(), ErrorKind::MissingField);
}

#[test]
fn test_deployment_descriptor_ignores_extra_fields() {
    let descriptor =
        parse_deployment(r#"{"deploymentId":"d-ABCDEFGH1","deploymentInfo":{"status":"Created"}}"#)
            .unwrap();
    assert_eq!(descriptor.deployment_id, "d-ABCDEFGH1");
}
