//! Operations behind the `gcb-json` binary.

use gcb_model::{Build, BuildOperationMetadata, Operation};

use crate::codec::JsonTextCodec;
use crate::error::DataFormatError;
use crate::parser::GoogleCloudBuildParser;

/// Document kinds `normalize` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentKind {
    #[default]
    Build,
    Operation,
}

/// Parses `input` as `kind` and prints it back in canonical form.
pub fn normalize<C: JsonTextCodec>(
    parser: &GoogleCloudBuildParser<C>,
    input: &str,
    kind: DocumentKind,
) -> Result<String, DataFormatError> {
    match kind {
        DocumentKind::Build => parser.serialize(&parser.parse::<Build>(input)?),
        DocumentKind::Operation => parser.serialize(&parser.parse::<Operation>(input)?),
    }
}

/// Build embedded in an operation's metadata; `None` when the operation
/// carries no metadata or the metadata carries no build.
pub fn operation_build<C: JsonTextCodec>(
    parser: &GoogleCloudBuildParser<C>,
    input: &str,
) -> Result<Option<Build>, DataFormatError> {
    let operation: Operation = parser.parse(input)?;
    let Some(metadata) = operation.metadata else {
        return Ok(None);
    };
    let metadata: BuildOperationMetadata = parser.convert(&metadata)?;
    Ok(metadata.build)
}

/// One-line summary: `<id> <STATUS> complete=<bool>`.
pub fn status_line<C: JsonTextCodec>(
    parser: &GoogleCloudBuildParser<C>,
    input: &str,
) -> Result<String, DataFormatError> {
    let build: Build = parser.parse(input)?;
    let id = if build.id.is_empty() { "-" } else { build.id.as_str() };
    Ok(format!(
        "{id} {} complete={}",
        build.status(),
        build.is_complete()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_nulls_and_unknown_fields() {
        let parser = GoogleCloudBuildParser::new();
        let text = r#"{"id":"b","logUrl":null,"futureField":{"x":1},"timeout":"600.000s"}"#;
        assert_eq!(
            normalize(&parser, text, DocumentKind::Build).unwrap(),
            r#"{"id":"b","timeout":"600s"}"#
        );
    }

    #[test]
    fn operation_without_metadata_has_no_build() {
        let parser = GoogleCloudBuildParser::new();
        assert_eq!(operation_build(&parser, r#"{"name":"op"}"#).unwrap(), None);
    }

    #[test]
    fn status_line_for_anonymous_build() {
        let parser = GoogleCloudBuildParser::new();
        assert_eq!(
            status_line(&parser, r#"{"status":"QUEUED"}"#).unwrap(),
            "- QUEUED complete=false"
        );
    }
}
