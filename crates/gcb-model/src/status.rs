//! Build and step lifecycle status.

use serde::{Deserialize, Serialize};

/// Status of a build or of one of its steps.
///
/// Values the API adds later decode as [`BuildStatus::StatusUnknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    Pending,
    Queued,
    Working,
    Success,
    Failure,
    InternalError,
    Timeout,
    Cancelled,
    Expired,
    #[default]
    #[serde(other)]
    StatusUnknown,
}

impl BuildStatus {
    pub const ALL: [BuildStatus; 10] = [
        BuildStatus::StatusUnknown,
        BuildStatus::Pending,
        BuildStatus::Queued,
        BuildStatus::Working,
        BuildStatus::Success,
        BuildStatus::Failure,
        BuildStatus::InternalError,
        BuildStatus::Timeout,
        BuildStatus::Cancelled,
        BuildStatus::Expired,
    ];

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStatus::StatusUnknown => "STATUS_UNKNOWN",
            BuildStatus::Pending => "PENDING",
            BuildStatus::Queued => "QUEUED",
            BuildStatus::Working => "WORKING",
            BuildStatus::Success => "SUCCESS",
            BuildStatus::Failure => "FAILURE",
            BuildStatus::InternalError => "INTERNAL_ERROR",
            BuildStatus::Timeout => "TIMEOUT",
            BuildStatus::Cancelled => "CANCELLED",
            BuildStatus::Expired => "EXPIRED",
        }
    }

    /// True once the build can no longer change state.
    pub fn is_complete(&self) -> bool {
        matches!(
            self,
            BuildStatus::Success
                | BuildStatus::Failure
                | BuildStatus::InternalError
                | BuildStatus::Timeout
                | BuildStatus::Cancelled
                | BuildStatus::Expired
        )
    }

    pub fn is_successful(&self) -> bool {
        *self == BuildStatus::Success
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_as_str() {
        for status in BuildStatus::ALL {
            let text = serde_json::to_string(&status).unwrap();
            assert_eq!(text, format!("\"{}\"", status.as_str()));
            assert_eq!(serde_json::from_str::<BuildStatus>(&text).unwrap(), status);
        }
    }

    #[test]
    fn unknown_values_fall_back() {
        let status: BuildStatus = serde_json::from_str("\"PAUSED\"").unwrap();
        assert_eq!(status, BuildStatus::StatusUnknown);
    }

    #[test]
    fn completeness() {
        assert!(!BuildStatus::Queued.is_complete());
        assert!(!BuildStatus::Working.is_complete());
        assert!(BuildStatus::Timeout.is_complete());
        assert!(BuildStatus::Success.is_successful());
        assert!(!BuildStatus::Failure.is_successful());
    }
}
