//! Rust-style extraction over the dual-return convention.
//!
//! A fallible call that hands back a value together with an optional error, `(T, Option<E>)`,
//! can be wrapped into a [`Result`] and consumed by one of its extraction methods, or consumed
//! directly by the free functions:
//!
//! ```
//! fn divide(a: i32, b: i32) -> (i32, Option<unwrap::Error>) {
//! 	match b {
//! 		0 => (0, Some("division by zero".into())),
//! 		_ => (a / b, None),
//! 	}
//! }
//!
//! assert_eq!(unwrap::unwrap(divide(4, 2)), 2);
//! assert_eq!(unwrap::raw(divide(4, 0)).unwrap_or(2), 2);
//!
//! let (value, err) = divide(4, 0);
//! assert_eq!(unwrap::wrap(value, err).unwrap_or_default(), 0);
//! ```

/// Error-handling conventions shared by the workspace.
pub mod error;
mod fail;
mod free;
mod result;

pub use free::*;
pub use result::*;

/// The default error indicator of a dual-returning call.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

#[cfg(test)]
pub(crate) fn divide(a: i32, b: i32) -> (i32, Option<Error>) {
	if b == 0 {
		return (0, Some("division by zero".into()));
	}

	(a / b, None)
}
