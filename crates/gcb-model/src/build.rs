//! The `Build` resource and its nested messages.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::source::{HashType, Source, SourceProvenance};
use crate::status::BuildStatus;
use crate::wire;

/// Start and end times of a build phase. Timestamps are RFC 3339 text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// One step of a build: a container invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStep {
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub env: Vec<String>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub args: Vec<String>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub dir: String,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub wait_for: Vec<String>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub entrypoint: String,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub secret_env: Vec<String>,
    #[serde(
        default,
        with = "wire::duration::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimeSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BuildStatus>,
}

/// An image pushed by the build.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltImage {
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub digest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_timing: Option<TimeSpan>,
}

/// Artifacts created by the build pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<BuiltImage>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub build_step_images: Vec<String>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub artifact_manifest: String,
    #[serde(
        default,
        with = "wire::int64::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_artifacts: Option<i64>,
    /// Raw output of each step, indexed like `Build::steps`.
    #[serde(
        default,
        with = "wire::bytes::vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub build_step_outputs: Vec<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_timing: Option<TimeSpan>,
}

/// Optional knobs for running a build.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub source_provenance_hash: Vec<HashType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_verify_option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,
    #[serde(
        default,
        with = "wire::int64::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub disk_size_gb: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution_option: Option<String>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub dynamic_substitutions: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_streaming_option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_pool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<String>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub env: Vec<String>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub secret_env: Vec<String>,
}

/// A Cloud Build build: the object the rest of the system tracks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BuildStatus>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub status_detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub steps: Vec<BuildStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Results>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<String>,
    #[serde(
        default,
        with = "wire::duration::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
    #[serde(
        default,
        with = "wire::duration::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub queue_ttl: Option<Duration>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<String>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub logs_bucket: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_provenance: Option<SourceProvenance>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub build_trigger_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<BuildOptions>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub log_url: String,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub substitutions: BTreeMap<String, String>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    /// Phase name (e.g. `BUILD`, `PUSH`, `FETCHSOURCE`) to its time span.
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub timing: BTreeMap<String, TimeSpan>,
}

impl Build {
    /// Status, treating an unset field as [`BuildStatus::StatusUnknown`].
    pub fn status(&self) -> BuildStatus {
        self.status.unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.status().is_complete()
    }

    /// Step with the given `id`, if any.
    pub fn step(&self, id: &str) -> Option<&BuildStep> {
        self.steps.iter().find(|step| step.id == id)
    }
}
