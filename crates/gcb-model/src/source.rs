//! Build source locations and their resolved provenance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::wire::{self, WireError};

/// Where the build's source comes from.
///
/// A proto3 `oneof`: exactly one member key appears in the JSON object,
/// e.g. `{"storageSource": {...}}`. Unrecognized members are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Source {
    StorageSource(StorageSource),
    RepoSource(RepoSource),
    StorageSourceManifest(StorageSourceManifest),
}

/// Archive in Cloud Storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSource {
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub bucket: String,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub object: String,
    #[serde(
        default,
        with = "wire::int64::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub generation: Option<i64>,
}

/// Source manifest in Cloud Storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSourceManifest {
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub bucket: String,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub object: String,
    #[serde(
        default,
        with = "wire::int64::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub generation: Option<i64>,
}

/// Cloud Source Repositories location.
///
/// The revision `oneof` is inlined: at most one of `branchName`, `tagName`
/// and `commitSha` may be present, and each must be a string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RepoSourceWire")]
pub struct RepoSource {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub repo_name: String,
    #[serde(flatten)]
    pub revision: Option<Revision>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dir: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub invert_regex: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub substitutions: BTreeMap<String, String>,
}

/// Revision selector of a [`RepoSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Revision {
    BranchName(String),
    TagName(String),
    CommitSha(String),
}

/// `RepoSource` as it appears on the wire, revision members side by side.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepoSourceWire {
    #[serde(default, deserialize_with = "wire::null::deserialize")]
    project_id: String,
    #[serde(default, deserialize_with = "wire::null::deserialize")]
    repo_name: String,
    #[serde(default)]
    branch_name: Option<String>,
    #[serde(default)]
    tag_name: Option<String>,
    #[serde(default)]
    commit_sha: Option<String>,
    #[serde(default, deserialize_with = "wire::null::deserialize")]
    dir: String,
    #[serde(default, deserialize_with = "wire::null::deserialize")]
    invert_regex: bool,
    #[serde(default, deserialize_with = "wire::null::deserialize")]
    substitutions: BTreeMap<String, String>,
}

impl TryFrom<RepoSourceWire> for RepoSource {
    type Error = WireError;

    fn try_from(wire: RepoSourceWire) -> Result<Self, Self::Error> {
        let members = [
            wire.branch_name.map(Revision::BranchName),
            wire.tag_name.map(Revision::TagName),
            wire.commit_sha.map(Revision::CommitSha),
        ];
        let mut set = members.into_iter().flatten();
        let revision = set.next();
        if let Some(extra) = set.next() {
            let first = revision.as_ref().map_or("", Revision::member_name);
            return Err(WireError::ConflictingOneof {
                oneof: "revision",
                first,
                second: extra.member_name(),
            });
        }
        Ok(RepoSource {
            project_id: wire.project_id,
            repo_name: wire.repo_name,
            revision,
            dir: wire.dir,
            invert_regex: wire.invert_regex,
            substitutions: wire.substitutions,
        })
    }
}

impl Revision {
    /// JSON member name of this revision kind.
    pub fn member_name(&self) -> &'static str {
        match self {
            Revision::BranchName(_) => "branchName",
            Revision::TagName(_) => "tagName",
            Revision::CommitSha(_) => "commitSha",
        }
    }
}

/// Hash algorithm of a [`Hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HashType {
    Sha256,
    Md5,
    #[default]
    #[serde(other)]
    None,
}

/// Container message for a hash value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hash {
    #[serde(rename = "type", default, deserialize_with = "wire::null::deserialize")]
    pub hash_type: HashType,
    #[serde(default, with = "wire::bytes", skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHashes {
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub file_hash: Vec<Hash>,
}

/// Exact source a build ran against, filled in by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceProvenance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_storage_source: Option<StorageSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_repo_source: Option<RepoSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_storage_source_manifest: Option<StorageSourceManifest>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub file_hashes: BTreeMap<String, FileHashes>,
}
