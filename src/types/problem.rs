//! The [`Problem`] entity.

use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Arc;

use http::StatusCode;

use crate::types::option::{self, ProblemOption};
use crate::types::Value;

/// Shared handle to the error a [`Problem`] wraps.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Field map of a [`Problem`], ordered by key.
pub type Fields = BTreeMap<String, Value>;

/// An RFC 7807 problem detail.
///
/// A problem is a map of named fields plus an optional cause. Only the fields
/// are serialized; the cause participates in [`source`](Error::source) chains
/// and, when added through [`option::wrap`], leaves its message in `reason`.
///
/// Problems have no `PartialEq`: two problems are the same when they render
/// the same text, see [`same_problem`](crate::chain::same_problem).
///
/// # Examples
///
/// ```
/// use problem_rail::option::{custom, title};
/// use problem_rail::Problem;
///
/// let problem = Problem::new([title("titlestring"), custom("x", "value")]);
/// assert_eq!(problem.json_string(), r#"{"title":"titlestring","x":"value"}"#);
/// ```
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Problem {
    pub(crate) fields: Fields,
    pub(crate) cause: Option<Cause>,
}

impl Problem {
    /// Creates a problem and applies `opts` in order.
    pub fn new<I>(opts: I) -> Self
    where
        I: IntoIterator<Item = ProblemOption>,
    {
        let mut problem = Self::default();
        problem.append(opts);
        problem
    }

    /// Creates a problem with `status` and the standard reason phrase as `title`.
    ///
    /// Codes without a registered phrase get an empty title.
    pub fn of(status: u16) -> Self {
        Self::new([option::status(status), option::title(reason_phrase(status))])
    }

    /// Applies further options in place and returns the same problem.
    pub fn append<I>(&mut self, opts: I) -> &mut Self
    where
        I: IntoIterator<Item = ProblemOption>,
    {
        for opt in opts {
            opt.apply(self);
        }
        self
    }

    /// Consuming form of [`append`](Self::append).
    pub fn with<I>(mut self, opts: I) -> Self
    where
        I: IntoIterator<Item = ProblemOption>,
    {
        self.append(opts);
        self
    }

    pub(crate) fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into().normalized());
    }

    /// Returns the field stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns all fields.
    #[inline]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Returns `true` when no field is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the `status` field when it is an integer.
    ///
    /// Note the value may still be out of range for an HTTP status line.
    #[inline]
    pub fn status(&self) -> Option<i64> {
        self.get(option::STATUS).and_then(Value::as_i64)
    }

    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.get(option::TITLE).and_then(Value::as_str)
    }

    #[inline]
    pub fn detail(&self) -> Option<&str> {
        self.get(option::DETAIL).and_then(Value::as_str)
    }

    #[inline]
    pub fn type_uri(&self) -> Option<&str> {
        self.get(option::TYPE).and_then(Value::as_str)
    }

    #[inline]
    pub fn instance(&self) -> Option<&str> {
        self.get(option::INSTANCE).and_then(Value::as_str)
    }

    #[inline]
    pub fn reason(&self) -> Option<&str> {
        self.get(option::REASON).and_then(Value::as_str)
    }

    /// Returns the wrapped cause, the next link of the error chain.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns the shared handle of the wrapped cause.
    #[inline]
    pub fn shared_cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

impl From<StatusCode> for Problem {
    #[inline]
    fn from(status: StatusCode) -> Self {
        Self::of(status.as_u16())
    }
}

/// Standard English reason phrase for `status`, or `""` when there is none.
pub fn reason_phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status).ok().and_then(|s| s.canonical_reason()).unwrap_or("")
}
