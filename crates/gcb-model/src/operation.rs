//! Long-running operations returned by `projects.builds.create`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::build::Build;
use crate::wire;

/// `google.longrunning.Operation`.
///
/// `metadata` and `response` are `Any` payloads; they stay untyped here and
/// are converted into a concrete type (e.g. [`BuildOperationMetadata`]) by
/// whoever knows what the operation carries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Map<String, Value>>,
}

/// `google.rpc.Status` attached to a failed operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcStatus {
    #[serde(default, deserialize_with = "wire::null::deserialize")]
    pub code: i32,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub message: String,
    #[serde(
        default,
        deserialize_with = "wire::null::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub details: Vec<Value>,
}

/// Typed view of an operation's metadata for build creation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOperationMetadata {
    /// Type URL of the `Any` payload, kept so the metadata re-encodes intact.
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub type_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,
}

impl BuildOperationMetadata {
    pub const TYPE_URL: &'static str =
        "type.googleapis.com/google.devtools.cloudbuild.v1.BuildOperationMetadata";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failed_operation_shape() {
        let op: Operation = serde_json::from_value(json!({
            "name": "operations/build/p/abc",
            "done": true,
            "error": {"code": 9, "message": "precondition failed"}
        }))
        .unwrap();
        assert!(op.done);
        assert_eq!(op.error.as_ref().unwrap().code, 9);
        assert!(op.metadata.is_none());
    }

    #[test]
    fn payload_nulls_are_kept() {
        let value = json!({"name": "op", "done": null, "response": {"x": null}});
        let op: Operation = serde_json::from_value(value).unwrap();
        assert!(!op.done);
        assert_eq!(op.response.as_ref().unwrap()["x"], Value::Null);
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"name": "op", "response": {"x": null}})
        );
    }

    #[test]
    fn pending_operation_omits_done() {
        let op = Operation {
            name: "operations/x".into(),
            ..Operation::default()
        };
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"name": "operations/x"})
        );
    }
}
