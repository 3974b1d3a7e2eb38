//! RFC 7807 problem details as first-class Rust errors.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `problem_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building a Problem
//!
//! ```
//! use problem_rail::option::{custom, detail, status, title};
//! use problem_rail::Problem;
//!
//! let mut problem = Problem::new([title("titlestring"), status(404), custom("x", "value")]);
//! problem.append([detail("some more details")]);
//!
//! assert_eq!(
//!     problem.json_string(),
//!     r#"{"detail":"some more details","status":404,"title":"titlestring","x":"value"}"#
//! );
//! ```
//!
//! ## Two Wire Formats
//!
//! ```
//! use problem_rail::Problem;
//!
//! let problem = Problem::of(404);
//! assert_eq!(problem.json_string(), r#"{"status":404,"title":"Not Found"}"#);
//! assert_eq!(
//!     problem.xml_string().unwrap(),
//!     r#"<problem xmlns="urn:ietf:rfc:7807"><status>404</status><title>Not Found</title></problem>"#
//! );
//!
//! let decoded = Problem::from_xml(problem.xml_string().unwrap().as_bytes()).unwrap();
//! assert!(decoded.is(&problem));
//! ```
//!
//! ## Wrapping Causes
//!
//! ```
//! use problem_rail::chain::find_in_chain;
//! use problem_rail::option::{title, wrap};
//! use problem_rail::Problem;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
//! let problem = Problem::new([wrap(io), title("Internal Error")]);
//!
//! assert_eq!(problem.reason(), Some("config.toml missing"));
//! let io = find_in_chain::<std::io::Error>(&problem).unwrap();
//! assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
//! ```

/// Error-chain integration: `Error` impl, identity and chain walks
pub mod chain;
/// JSON and XML codecs
pub mod codec;
/// Codec and transport errors
pub mod error;
/// Formatting macros for the string options
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Writing problems to HTTP responses
pub mod transport;
/// Problem, Value and the option protocol
pub mod types;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use chain::{chain_contains, find_in_chain, same_problem, Chain};
pub use codec::Format;
pub use error::CodecError;
pub use transport::ResponseSink;
pub use types::option;
pub use types::{reason_phrase, Cause, Fields, Problem, ProblemOption, Value};

/// Media type of JSON problems (RFC 7807, section 6.1).
pub const CONTENT_TYPE_JSON: &str = "application/problem+json";

/// Media type of XML problems (RFC 7807, section 6.2).
pub const CONTENT_TYPE_XML: &str = "application/problem+xml";

/// Default namespace of the XML `<problem>` element.
pub const XML_NAMESPACE: &str = "urn:ietf:rfc:7807";
