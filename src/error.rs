//! Errors produced while encoding, decoding or writing problems.

use std::num::ParseIntError;
use std::str::Utf8Error;

/// Failure of a codec or transport operation.
///
/// Decoding aborts on the first error; fields collected before it are
/// discarded along with the partial problem.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The XML input is not well-formed.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An element resolved to a namespace other than `urn:ietf:rfc:7807`.
    #[error("expected namespace {expected}, found {found:?}", expected = crate::XML_NAMESPACE)]
    Namespace { found: String },

    /// The text of a `status` element is not an integer.
    #[error("status {text:?} is not an integer")]
    InvalidStatus {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// A field key cannot be written as an XML element name.
    #[error("field {0:?} is not a valid XML element name")]
    InvalidElementName(String),

    /// Element names or text are not valid UTF-8.
    #[error("invalid UTF-8 in XML: {0}")]
    Utf8(#[from] Utf8Error),

    /// Writing to the response sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
