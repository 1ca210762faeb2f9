//! Wire conventions of the Cloud Build object family, checked against the
//! JSON shapes the API documents.

use std::time::Duration;

use gcb_model::wire::{format_duration, parse_duration, WireError};
use gcb_model::{
    Build, BuildOperationMetadata, BuildStatus, FileHashes, Hash, HashType, RepoSource, Results,
    Revision, Source, SourceProvenance, StorageSourceManifest,
};
use proptest::prelude::*;
use serde_json::json;

// ---------------------------------------------------------------------------
// oneof members
// ---------------------------------------------------------------------------

#[test]
fn source_variant_matrix() {
    let cases = [
        (
            json!({"storageSource": {"bucket": "b", "object": "o"}}),
            "storage",
        ),
        (
            json!({"repoSource": {"repoName": "r", "branchName": "main"}}),
            "repo",
        ),
        (
            json!({"storageSourceManifest": {"bucket": "b", "object": "m.json", "generation": 3}}),
            "manifest",
        ),
    ];
    for (value, label) in cases {
        let source: Source = serde_json::from_value(value).unwrap();
        let matched = match &source {
            Source::StorageSource(_) => "storage",
            Source::RepoSource(_) => "repo",
            Source::StorageSourceManifest(_) => "manifest",
        };
        assert_eq!(matched, label);
    }
}

#[test]
fn manifest_generation_reads_number_writes_string() {
    let source: Source = serde_json::from_value(json!({
        "storageSourceManifest": {"bucket": "b", "object": "m.json", "generation": 3}
    }))
    .unwrap();
    assert_eq!(
        source,
        Source::StorageSourceManifest(StorageSourceManifest {
            bucket: "b".into(),
            object: "m.json".into(),
            generation: Some(3),
        })
    );
    assert_eq!(
        serde_json::to_value(&source).unwrap()["storageSourceManifest"]["generation"],
        json!("3")
    );
}

#[test]
fn revision_member_matrix() {
    let cases = [
        ("branchName", Revision::BranchName("main".into())),
        ("tagName", Revision::TagName("main".into())),
        ("commitSha", Revision::CommitSha("main".into())),
    ];
    for (key, revision) in cases {
        let repo = RepoSource {
            repo_name: "r".into(),
            revision: Some(revision.clone()),
            ..RepoSource::default()
        };
        let value = serde_json::to_value(&repo).unwrap();
        assert_eq!(value, json!({"repoName": "r", key: "main"}));
        let back: RepoSource = serde_json::from_value(value).unwrap();
        assert_eq!(back.revision, Some(revision));
    }
}

#[test]
fn revision_member_rejection_matrix() {
    let cases = [
        ("wrong type", json!({"repoName": "r", "branchName": 5})),
        ("array", json!({"repoName": "r", "commitSha": ["x"]})),
        ("two members", json!({"branchName": "a", "tagName": "b"})),
        ("three members", json!({"branchName": "a", "tagName": "b", "commitSha": "c"})),
    ];
    for (name, value) in cases {
        assert!(
            serde_json::from_value::<RepoSource>(value).is_err(),
            "case {name} should fail"
        );
    }

    let nested = json!({"source": {"repoSource": {"commitSha": ["x"]}}});
    assert!(serde_json::from_value::<Build>(nested).is_err());
}

// ---------------------------------------------------------------------------
// scalars
// ---------------------------------------------------------------------------

#[test]
fn results_scalars() {
    let results = Results {
        num_artifacts: Some(-1),
        build_step_outputs: vec![vec![0, 1, 2], vec![]],
        ..Results::default()
    };
    assert_eq!(
        serde_json::to_value(&results).unwrap(),
        json!({"numArtifacts": "-1", "buildStepOutputs": ["AAEC", ""]})
    );
}

#[test]
fn provenance_hashes() {
    let mut provenance = SourceProvenance::default();
    provenance.file_hashes.insert(
        "gs://b/o#1".into(),
        FileHashes {
            file_hash: vec![Hash {
                hash_type: HashType::Sha256,
                value: b"\x00\xff".to_vec(),
            }],
        },
    );
    let value = serde_json::to_value(&provenance).unwrap();
    assert_eq!(
        value,
        json!({"fileHashes": {"gs://b/o#1": {"fileHash": [{"type": "SHA256", "value": "AP8="}]}}})
    );
    assert_eq!(serde_json::from_value::<SourceProvenance>(value).unwrap(), provenance);
}

#[test]
fn unknown_hash_type_falls_back_to_none() {
    let hash: Hash = serde_json::from_value(json!({"type": "SHA512", "value": ""})).unwrap();
    assert_eq!(hash.hash_type, HashType::None);
}

#[test]
fn duration_errors_surface_through_serde() {
    let err = serde_json::from_value::<Build>(json!({"timeout": "600"})).unwrap_err();
    assert!(err.to_string().contains("must end with `s`"), "{err}");
    assert_eq!(
        parse_duration("1.5"),
        Err(WireError::MissingDurationSuffix("1.5".into()))
    );
}

// ---------------------------------------------------------------------------
// operations
// ---------------------------------------------------------------------------

#[test]
fn build_operation_metadata_shape() {
    let metadata = BuildOperationMetadata {
        type_url: Some(BuildOperationMetadata::TYPE_URL.into()),
        build: Some(Build {
            id: "b".into(),
            status: Some(BuildStatus::Pending),
            ..Build::default()
        }),
    };
    assert_eq!(
        serde_json::to_value(&metadata).unwrap(),
        json!({
            "@type": "type.googleapis.com/google.devtools.cloudbuild.v1.BuildOperationMetadata",
            "build": {"id": "b", "status": "PENDING"}
        })
    );
}

proptest! {
    #[test]
    fn duration_text_round_trips(secs in 0u64..10_000_000_000, nanos in 0u32..1_000_000_000) {
        let duration = Duration::new(secs, nanos);
        let text = format_duration(&duration);
        prop_assert!(text.ends_with('s'));
        prop_assert_eq!(parse_duration(&text).unwrap(), duration);
    }
}
