//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use problem_rail::prelude::*;
//!
//! let problem = Problem::new([title("Out of credit"), status(403), titlef!("{} left", 30)]);
//! assert_eq!(problem.title(), Some("30 left"));
//! ```

// Macros
pub use crate::{detailf, instancef, titlef};

// Core types
pub use crate::types::{Problem, ProblemOption, Value};
pub use crate::{CodecError, Format, ResponseSink};

// Options
pub use crate::option::{
    custom, detail, instance, status, title, type_uri, wrap, wrap_silent,
};

// Chain helpers
pub use crate::chain::{chain_contains, find_in_chain, same_problem};
