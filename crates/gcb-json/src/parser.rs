//! The facade the rest of the system goes through for Cloud Build JSON.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{CodecError, GoogleJsonCodec, JsonTextCodec};
use crate::error::DataFormatError;

/// Parses, serializes and converts Cloud Build objects with a codec that
/// understands the API's JSON conventions.
///
/// Build one at startup and share it (`Arc<GoogleCloudBuildParser>`); do
/// not construct codecs elsewhere. Every call is independent: the parser
/// holds nothing but its stateless codec, so it is safe to use from many
/// threads at once.
///
/// ```
/// use gcb_json::GoogleCloudBuildParser;
/// use gcb_model::{Build, BuildStatus};
///
/// let parser = GoogleCloudBuildParser::new();
/// let build: Build = parser.parse(r#"{"id":"b-1","status":"SUCCESS"}"#).unwrap();
/// assert_eq!(build.status(), BuildStatus::Success);
/// assert_eq!(parser.serialize(&build).unwrap(), r#"{"id":"b-1","status":"SUCCESS"}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoogleCloudBuildParser<C = GoogleJsonCodec> {
    codec: C,
}

impl GoogleCloudBuildParser {
    pub fn new() -> Self {
        Self::with_codec(GoogleJsonCodec::new())
    }
}

impl<C: JsonTextCodec> GoogleCloudBuildParser<C> {
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// Identifier of the underlying codec, for diagnostics.
    pub fn codec_id(&self) -> &'static str {
        self.codec.id()
    }

    /// Decodes `input` into a `T`.
    pub fn parse<T: DeserializeOwned>(&self, input: &str) -> Result<T, DataFormatError> {
        self.codec
            .decode(input)
            .map_err(|source| DataFormatError::Decode {
                codec: self.codec.id(),
                source,
            })
    }

    /// Like [`parse`](Self::parse) for raw payloads such as Pub/Sub data.
    pub fn parse_slice<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, DataFormatError> {
        self.parse(std::str::from_utf8(input)?)
    }

    /// Re-reads `input` as a `T`: `parse(serialize(input))`.
    pub fn convert<T, S>(&self, input: &S) -> Result<T, DataFormatError>
    where
        T: DeserializeOwned,
        S: Serialize + ?Sized,
    {
        let text = self.serialize(input)?;
        self.parse(&text)
    }

    /// Encodes `input` as a complete JSON document.
    pub fn serialize<S: Serialize + ?Sized>(&self, input: &S) -> Result<String, DataFormatError> {
        // Scoped to this call; dropped with whatever it holds on failure.
        let mut buffer = Vec::with_capacity(128);
        self.codec
            .encode(input, &mut buffer)
            .and_then(|()| String::from_utf8(buffer).map_err(CodecError::NotUtf8))
            .map_err(|source| DataFormatError::Encode {
                codec: self.codec.id(),
                source,
            })
    }
}
