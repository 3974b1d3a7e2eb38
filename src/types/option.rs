//! Options that configure a [`Problem`].
//!
//! Every option targets exactly one field (or the cause) and is applied
//! immediately when handed to [`Problem::new`], [`Problem::with`] or
//! [`Problem::append`]. Applying two options that target the same field keeps
//! the last one.
//!
//! # Examples
//!
//! ```
//! use problem_rail::option::{custom, status, title};
//! use problem_rail::Problem;
//!
//! let mut problem = Problem::new([title("Out of credit"), status(403)]);
//! problem.append([custom("balance", 30), title("Insufficient funds")]);
//!
//! assert_eq!(
//!     problem.json_string(),
//!     r#"{"balance":30,"status":403,"title":"Insufficient funds"}"#
//! );
//! ```

use std::error::Error;
use std::sync::Arc;

use crate::types::problem::{Cause, Problem};
use crate::types::Value;

/// Field name of the problem type URI.
pub const TYPE: &str = "type";
/// Field name of the short summary.
pub const TITLE: &str = "title";
/// Field name of the HTTP status code.
pub const STATUS: &str = "status";
/// Field name of the occurrence-specific explanation.
pub const DETAIL: &str = "detail";
/// Field name of the occurrence URI.
pub const INSTANCE: &str = "instance";
/// Field name holding the rendered message of a wrapped cause.
pub const REASON: &str = "reason";

/// A deferred mutation of a [`Problem`].
#[derive(Debug, Clone)]
pub enum ProblemOption {
    /// URI identifying the problem type.
    Type(String),
    /// Short, human-readable summary of the problem type.
    Title(String),
    /// HTTP status code for this occurrence.
    Status(u16),
    /// Explanation specific to this occurrence.
    Detail(String),
    /// URI identifying this specific occurrence.
    Instance(String),
    /// Any other member.
    Custom { key: String, value: Value },
    /// Sets the cause and records its message under `reason`.
    Wrap(Cause),
    /// Sets the cause without touching the payload.
    WrapSilent(Cause),
}

impl ProblemOption {
    /// Applies this option to `problem`.
    pub fn apply(self, problem: &mut Problem) {
        match self {
            Self::Type(uri) => problem.set(TYPE, uri),
            Self::Title(text) => problem.set(TITLE, text),
            Self::Status(code) => problem.set(STATUS, code),
            Self::Detail(text) => problem.set(DETAIL, text),
            Self::Instance(uri) => problem.set(INSTANCE, uri),
            Self::Custom { key, value } => problem.set(key, value),
            Self::Wrap(cause) => {
                problem.set(REASON, cause.to_string());
                problem.cause = Some(cause);
            },
            Self::WrapSilent(cause) => problem.cause = Some(cause),
        }
    }
}

/// Sets the type URI. When dereferenced it should document the problem type.
#[inline]
pub fn type_uri(uri: impl Into<String>) -> ProblemOption {
    ProblemOption::Type(uri.into())
}

/// Sets a short title, e.g. `Service Unavailable`.
#[inline]
pub fn title(text: impl Into<String>) -> ProblemOption {
    ProblemOption::Title(text.into())
}

/// Sets the HTTP status code.
#[inline]
pub fn status(code: u16) -> ProblemOption {
    ProblemOption::Status(code)
}

/// Sets a human-readable explanation of this occurrence.
#[inline]
pub fn detail(text: impl Into<String>) -> ProblemOption {
    ProblemOption::Detail(text.into())
}

/// Sets the URI identifying this occurrence.
#[inline]
pub fn instance(uri: impl Into<String>) -> ProblemOption {
    ProblemOption::Instance(uri.into())
}

/// Sets an arbitrary member.
#[inline]
pub fn custom(key: impl Into<String>, value: impl Into<Value>) -> ProblemOption {
    ProblemOption::Custom { key: key.into(), value: value.into() }
}

/// Wraps `err` as the cause and stores its message under `reason`.
#[inline]
pub fn wrap<E>(err: E) -> ProblemOption
where
    E: Error + Send + Sync + 'static,
{
    ProblemOption::Wrap(Arc::new(err))
}

/// Like [`wrap`], for a cause that is already shared.
#[inline]
pub fn wrap_shared(err: Cause) -> ProblemOption {
    ProblemOption::Wrap(err)
}

/// Wraps `err` as the cause without exposing it in the payload.
///
/// The cause stays reachable through [`Problem::cause`] and
/// [`source`](std::error::Error::source).
#[inline]
pub fn wrap_silent<E>(err: E) -> ProblemOption
where
    E: Error + Send + Sync + 'static,
{
    ProblemOption::WrapSilent(Arc::new(err))
}

/// Like [`wrap_silent`], for a cause that is already shared.
#[inline]
pub fn wrap_silent_shared(err: Cause) -> ProblemOption {
    ProblemOption::WrapSilent(err)
}
