//! Codec following the Google API client's JSON conventions.
//!
//! Field names, `int64`, `bytes`, durations and the "`null` means unset"
//! rule for declared fields all live on the `gcb-model` types themselves,
//! so this codec reads and writes JSON text as is. Untyped payloads such as
//! operation metadata keep their `null` members in both directions.

use std::io;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{CodecError, JsonTextCodec};

#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleJsonCodec;

impl GoogleJsonCodec {
    pub fn new() -> Self {
        Self
    }
}

impl JsonTextCodec for GoogleJsonCodec {
    fn id(&self) -> &'static str {
        "google-json"
    }

    fn decode<T: DeserializeOwned>(&self, input: &str) -> Result<T, CodecError> {
        Ok(serde_json::from_str(input)?)
    }

    fn encode<T, W>(&self, value: &T, writer: &mut W) -> Result<(), CodecError>
    where
        T: Serialize + ?Sized,
        W: io::Write,
    {
        serde_json::to_writer(&mut *writer, value)?;
        writer.flush()?;
        Ok(())
    }
}
