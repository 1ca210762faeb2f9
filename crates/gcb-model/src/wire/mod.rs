//! Serde adapters for the scalar encodings Cloud Build uses on the wire.
//!
//! The API follows the proto3 JSON mapping: 64-bit integers travel as
//! strings, `bytes` travel as base64 and durations travel as `"<secs>s"`.
//! Each submodule is meant for `#[serde(with = "...")]`, except `null`,
//! which only deserializes.

pub mod bytes;
pub mod duration;
pub mod error;
pub mod int64;
pub mod null;

pub use duration::{format_duration, parse_duration};
pub use error::WireError;
