//! JSON facade for Google Cloud Build objects.
//!
//! Cloud Build resources follow the proto3 JSON mapping, which a general
//! object mapper gets wrong. Everything that reads or writes them goes
//! through [`GoogleCloudBuildParser`], a narrow wrapper around a codec that
//! follows those conventions:
//!
//! - [`GoogleCloudBuildParser::parse`]: JSON text to a typed value.
//! - [`GoogleCloudBuildParser::serialize`]: typed value to JSON text.
//! - [`GoogleCloudBuildParser::convert`]: one typed view to another, via text.
//!
//! Every failure surfaces as a [`DataFormatError`].

pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod parser;

pub use codec::{CodecError, GoogleJsonCodec, JsonTextCodec};
pub use config::GcbSettings;
pub use error::{ConfigError, DataFormatError};
pub use parser::GoogleCloudBuildParser;
