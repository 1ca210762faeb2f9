//! Wire-scalar parse errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("duration `{0}` must end with `s`")]
    MissingDurationSuffix(String),
    #[error("duration `{0}` is negative")]
    NegativeDuration(String),
    #[error("duration `{0}` is not a decimal number of seconds")]
    InvalidDuration(String),
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
    #[error("`{0}` is not a 64-bit integer")]
    InvalidInt64(String),
    #[error("oneof `{oneof}` has both `{first}` and `{second}` set")]
    ConflictingOneof {
        oneof: &'static str,
        first: &'static str,
        second: &'static str,
    },
}
