//! Codec trait and its error type.

use std::io;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("JSON does not fit the requested shape: {0}")]
    Data(#[source] serde_json::Error),
    #[error("JSON input ended early: {0}")]
    Eof(#[source] serde_json::Error),
    #[error("I/O failure while writing JSON: {0}")]
    Io(#[source] io::Error),
    #[error("codec wrote bytes that are not UTF-8: {0}")]
    NotUtf8(#[source] std::string::FromUtf8Error),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax => CodecError::Syntax(err),
            Category::Data => CodecError::Data(err),
            Category::Eof => CodecError::Eof(err),
            Category::Io => CodecError::Io(err.into()),
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        CodecError::Io(err)
    }
}

/// Text-level JSON codec: decode `&str` into a value, encode a value into
/// a writer.
///
/// Implementations must be stateless so one instance can serve concurrent
/// callers without locking.
pub trait JsonTextCodec: Send + Sync {
    fn id(&self) -> &'static str;

    fn decode<T: DeserializeOwned>(&self, input: &str) -> Result<T, CodecError>;

    fn encode<T, W>(&self, value: &T, writer: &mut W) -> Result<(), CodecError>
    where
        T: Serialize + ?Sized,
        W: io::Write;
}
