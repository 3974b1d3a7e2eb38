//! Wire formats of a [`Problem`](crate::Problem).
//!
//! - [`json`]: `application/problem+json`, the primary format. It also backs the
//!   problem's [`Display`](core::fmt::Display) output.
//! - [`xml`]: `application/problem+xml`, rooted at `<problem>` in the
//!   `urn:ietf:rfc:7807` namespace.
//!
//! Neither format carries the cause; decoded problems never have one.
pub mod json;
pub mod xml;

/// Body format of an encoded problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    /// Media type sent as `Content-Type`.
    #[inline]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => crate::CONTENT_TYPE_JSON,
            Self::Xml => crate::CONTENT_TYPE_XML,
        }
    }
}
