//! Google Cloud Build v1 resources with their JSON wire conventions.
//!
//! These types are shaped by the proto3 JSON mapping the Cloud Build API
//! speaks: lowerCamelCase names, `oneof` members as single keys, `int64`
//! as strings, `bytes` as base64, durations as `"<secs>s"`, unset fields
//! omitted. Decode and encode them through `gcb-json`, not through an
//! ad-hoc mapper.

pub mod build;
pub mod operation;
pub mod source;
pub mod status;
pub mod wire;

pub use build::{Build, BuildOptions, BuildStep, BuiltImage, Results, TimeSpan};
pub use operation::{BuildOperationMetadata, Operation, RpcStatus};
pub use source::{
    FileHashes, Hash, HashType, RepoSource, Revision, Source, SourceProvenance, StorageSource,
    StorageSourceManifest,
};
pub use status::BuildStatus;
