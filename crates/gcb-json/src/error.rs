//! Errors raised by the facade and its activation config.

use std::path::PathBuf;

use thiserror::Error;

use crate::codec::CodecError;

/// The one failure signal of the facade: text could not become a value,
/// or a value could not become text.
///
/// The facade never recovers from these; callers decide what a broken
/// payload means for their operation.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("cannot decode JSON with the {codec} codec: {source}")]
    Decode {
        codec: &'static str,
        #[source]
        source: CodecError,
    },
    #[error("cannot encode JSON with the {codec} codec: {source}")]
    Encode {
        codec: &'static str,
        #[source]
        source: CodecError,
    },
    #[error("JSON payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl DataFormatError {
    /// Low-level codec failure, when there is one.
    pub fn codec_error(&self) -> Option<&CodecError> {
        match self {
            DataFormatError::Decode { source, .. } | DataFormatError::Encode { source, .. } => {
                Some(source)
            }
            DataFormatError::InvalidUtf8(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{name} must be one of true/false/1/0, got `{value}`")]
    InvalidFlag { name: &'static str, value: String },
}
