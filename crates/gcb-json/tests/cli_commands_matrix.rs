//! The `gcb-json` command operations over fixture payloads.

use gcb_json::commands::{self, DocumentKind};
use gcb_json::{GcbSettings, GoogleCloudBuildParser};
use gcb_model::{Build, BuildStatus};
use std::io::Write;

const BUILD_SUCCESS: &str = include_str!("fixtures/build_success.json");
const OPERATION_QUEUED: &str = include_str!("fixtures/operation_queued.json");

#[test]
fn normalize_is_a_fixed_point() {
    let parser = GoogleCloudBuildParser::new();
    let once = commands::normalize(&parser, BUILD_SUCCESS, DocumentKind::Build).unwrap();
    let twice = commands::normalize(&parser, &once, DocumentKind::Build).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn normalize_operation_keeps_metadata_verbatim() {
    let parser = GoogleCloudBuildParser::new();
    let text = commands::normalize(&parser, OPERATION_QUEUED, DocumentKind::Operation).unwrap();
    assert!(text.contains(r#""logUrl":null"#));
    assert!(text.contains(r#""commitSha":"4f1c2d3e""#));
    let again = commands::normalize(&parser, &text, DocumentKind::Operation).unwrap();
    assert_eq!(text, again);
}

#[test]
fn typed_build_drops_null_members() {
    let parser = GoogleCloudBuildParser::new();
    let build = commands::operation_build(&parser, OPERATION_QUEUED)
        .unwrap()
        .expect("metadata carries a build");
    assert_eq!(build.log_url, "");
    assert!(!parser.serialize(&build).unwrap().contains("logUrl"));
}

#[test]
fn operation_build_extracts_embedded_build() {
    let parser = GoogleCloudBuildParser::new();
    let build = commands::operation_build(&parser, OPERATION_QUEUED)
        .unwrap()
        .expect("metadata carries a build");
    assert_eq!(build.id, "9b1c0f4e-6f2a-4a53-8c1d-2f0d5a6e7b10");
    assert_eq!(build.status(), BuildStatus::Queued);
}

#[test]
fn operation_build_rejects_bad_metadata() {
    let parser = GoogleCloudBuildParser::new();
    let input = r#"{"name": "op", "metadata": {"build": {"timeout": true}}}"#;
    assert!(commands::operation_build(&parser, input).is_err());
}

#[test]
fn status_line_for_fixture() {
    let parser = GoogleCloudBuildParser::new();
    assert_eq!(
        commands::status_line(&parser, BUILD_SUCCESS).unwrap(),
        "9b1c0f4e-6f2a-4a53-8c1d-2f0d5a6e7b10 SUCCESS complete=true"
    );
}

#[test]
fn settings_file_gates_the_parser() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[gcb]\nenabled = true").unwrap();
    let settings = GcbSettings::from_path(file.path()).unwrap();
    let parser = settings.activate().expect("enabled");
    let build: Build = parser.parse(BUILD_SUCCESS).unwrap();
    assert!(build.is_complete());

    let mut off = tempfile::NamedTempFile::new().unwrap();
    writeln!(off, "[gcb]\nenabled = false").unwrap();
    assert!(GcbSettings::from_path(off.path()).unwrap().activate().is_none());
}
