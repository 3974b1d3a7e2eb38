//! Error-chain integration.
//!
//! A [`Problem`] is an ordinary [`std::error::Error`]: its message is its JSON
//! encoding and its [`source`](Error::source) is the wrapped cause. On top of
//! that this module provides the identity check and chain walks that the
//! standard library leaves to callers:
//!
//! - [`same_problem`] - two errors are the same problem when their messages match
//! - [`chain`] - iterate an error and all of its sources
//! - [`chain_contains`] - [`same_problem`] for problem links, identity for the rest
//! - [`find_in_chain`] - downcast every link to a concrete type
//!
//! # Examples
//!
//! ```
//! use problem_rail::chain::{chain_contains, same_problem};
//! use problem_rail::option::{status, title, wrap};
//! use problem_rail::Problem;
//!
//! let root = Problem::new([status(404), title("Root Problem")]);
//! let outer = Problem::new([wrap(root.clone()), title("high level error msg")]);
//!
//! assert!(same_problem(outer.cause().unwrap(), &root));
//! assert!(chain_contains(&outer, &root));
//! ```

use core::fmt;
use std::error::Error;

use crate::types::Problem;

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl Error for Problem {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl Problem {
    /// Returns `true` when `err` renders the same message as this problem.
    ///
    /// `err` does not have to be a `Problem`: any error whose message equals
    /// this problem's JSON encoding matches.
    #[inline]
    pub fn is(&self, err: &dyn Error) -> bool {
        same_problem(self, err)
    }
}

/// Compares two errors by their rendered messages.
///
/// This is deliberately shallow: field order and value types only matter as
/// far as they change the text.
pub fn same_problem(a: &dyn Error, b: &dyn Error) -> bool {
    a.to_string() == b.to_string()
}

/// Iterator over an error followed by each of its sources.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone().map(|e| e.to_string())).finish()
    }
}

/// Walks `err` and its sources, one [`source`](Error::source) call per step.
#[inline]
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Returns `true` when any link of `err`'s chain matches `target`.
///
/// A link matches by [`same_problem`] when either side is a [`Problem`], and
/// only by identity (the very same error value) otherwise.
pub fn chain_contains(err: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    chain(err).any(|link| links_match(link, target))
}

fn links_match(link: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    if link.is::<Problem>() || target.is::<Problem>() {
        return same_problem(link, target);
    }
    core::ptr::addr_eq(link, target)
}

/// Returns the first link of `err`'s chain that is a `T`.
pub fn find_in_chain<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    chain(err).find_map(|link| link.downcast_ref::<T>())
}
