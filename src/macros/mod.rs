//! Formatting shorthands for the string options.
//!
//! - [`macro@crate::titlef`] - [`option::title`](crate::option::title) with `format!` arguments
//! - [`macro@crate::detailf`] - [`option::detail`](crate::option::detail) with `format!` arguments
//! - [`macro@crate::instancef`] - [`option::instance`](crate::option::instance) with `format!` arguments
//!
//! # Examples
//!
//! ```
//! use problem_rail::{detailf, instancef, titlef, Problem};
//!
//! let order = 42;
//! let problem = Problem::new([
//!     titlef!("order {} rejected", order),
//!     detailf!("balance is {}, but that costs {}", 30, 50),
//!     instancef!("/orders/{order}"),
//! ]);
//!
//! assert_eq!(problem.title(), Some("order 42 rejected"));
//! assert_eq!(problem.instance(), Some("/orders/42"));
//! ```

/// Creates a `title` option from `format!` arguments.
///
/// ```
/// use problem_rail::{titlef, Problem};
///
/// let problem = Problem::new([titlef!("this is a {}", "test")]);
/// assert_eq!(problem.json_string(), r#"{"title":"this is a test"}"#);
/// ```
#[macro_export]
macro_rules! titlef {
    ($($arg:tt)*) => {
        $crate::option::title(format!($($arg)*))
    };
}

/// Creates a `detail` option from `format!` arguments.
#[macro_export]
macro_rules! detailf {
    ($($arg:tt)*) => {
        $crate::option::detail(format!($($arg)*))
    };
}

/// Creates an `instance` option from `format!` arguments.
#[macro_export]
macro_rules! instancef {
    ($($arg:tt)*) => {
        $crate::option::instance(format!($($arg)*))
    };
}
