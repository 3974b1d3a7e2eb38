//! Problem, field values and the option protocol.
//!
//! # Examples
//!
//! ```
//! use problem_rail::option::{detail, instance};
//! use problem_rail::Problem;
//!
//! let mut problem = Problem::of(404);
//! problem.append([detail("no such order"), instance("/orders/42")]);
//!
//! assert_eq!(problem.status(), Some(404));
//! assert_eq!(problem.title(), Some("Not Found"));
//! ```
pub mod option;
pub mod problem;
pub mod value;

pub use option::ProblemOption;
pub use problem::{reason_phrase, Cause, Fields, Problem};
pub use value::Value;
