use core::fmt::Display;

use crate::Result;

/// A value paired with an optional error, as returned by a dual-returning call.
///
/// Implemented for the raw `(T, Option<E>)` pair and for an already wrapped [`Result`], so every
/// free function in this crate takes either form.
pub trait Dual {
	type Value;
	type Error;

	fn into_parts(self) -> (Self::Value, Option<Self::Error>);
}

impl<T, E> Dual for (T, Option<E>) {
	type Value = T;
	type Error = E;

	#[inline(always)]
	fn into_parts(self) -> (T, Option<E>) {
		self
	}
}

impl<T, E> Dual for Result<T, E> {
	type Value = T;
	type Error = E;

	#[inline(always)]
	fn into_parts(self) -> (T, Option<E>) {
		Result::into_parts(self)
	}
}

/// Wraps the output of a dual-returning call, storing both halves verbatim.
#[inline(always)]
pub fn wrap<T, E>(value: T, err: Option<E>) -> Result<T, E> {
	Result::new(value, err)
}

/// Wraps a pair in one expression: `raw(divide(4, 0)).or(2)`.
#[inline(always)]
pub fn raw<P: Dual>(pair: P) -> Result<P::Value, P::Error> {
	let (value, err) = pair.into_parts();
	Result::new(value, err)
}

/// Returns the value of the pair.
///
/// # Panics
///
/// Panics with `failed to unwrap: <error>` if the pair carries an error.
#[inline]
#[track_caller]
pub fn unwrap<P>(pair: P) -> P::Value
where
	P: Dual,
	P::Error: Display,
{
	match pair.into_parts() {
		(value, None) => value,
		(_, Some(err)) => crate::fail::unwrap_failed(&err),
	}
}

/// Returns the error of the pair.
///
/// # Panics
///
/// Panics if the pair carries no error.
#[inline]
#[track_caller]
pub fn unwrap_err<P: Dual>(pair: P) -> P::Error {
	match pair.into_parts() {
		(_, Some(err)) => err,
		(_, None) => crate::fail::unwrap_err_failed(),
	}
}

/// Returns the value of the pair.
///
/// # Panics
///
/// Panics with `<msg> : <error>` if the pair carries an error.
#[inline]
#[track_caller]
pub fn expect<P>(pair: P, msg: &str) -> P::Value
where
	P: Dual,
	P::Error: Display,
{
	match pair.into_parts() {
		(value, None) => value,
		(_, Some(err)) => crate::fail::expect_failed(msg, &err),
	}
}

/// Returns the error of the pair.
///
/// # Panics
///
/// Panics with `no error found: <msg>` if the pair carries no error.
#[inline]
#[track_caller]
pub fn expect_err<P: Dual>(pair: P, msg: &str) -> P::Error {
	match pair.into_parts() {
		(_, Some(err)) => err,
		(_, None) => crate::fail::expect_err_failed(msg),
	}
}

/// Returns the value slot of the pair without looking at the error.
///
/// If the pair carries an error, the result is whatever the failed call left in the value slot.
/// Nothing is checked and nothing panics; the caller vouches for the state.
#[inline(always)]
pub fn unchecked<P: Dual>(pair: P) -> P::Value {
	pair.into_parts().0
}

/// Returns the error slot of the pair without looking at its state.
///
/// On a pair without an error this is `None`.
#[inline(always)]
pub fn unwrap_err_unchecked<P: Dual>(pair: P) -> Option<P::Error> {
	pair.into_parts().1
}

#[test]
fn test_unwrap_call() {
	assert_eq!(unwrap(crate::divide(4, 2)), 2);
}

#[test]
#[should_panic(expected = "failed to unwrap: division by zero")]
fn test_unwrap_call_err() {
	unwrap(crate::divide(4, 0));
}

#[test]
fn test_unwrap_err_call() {
	assert_eq!(unwrap_err(crate::divide(4, 0)).to_string(), "division by zero");
}

#[test]
#[should_panic(expected = "failed to unwrap: error is absent")]
fn test_unwrap_err_call_ok() {
	unwrap_err(crate::divide(4, 2));
}

#[test]
fn test_unwrap_discrete() {
	assert_eq!(unwrap((10, None::<&str>)), 10);
	assert_eq!(unwrap_err((0, Some("bad"))), "bad");
}

#[test]
#[should_panic(expected = "parse : bad")]
fn test_expect_call_err() {
	expect((0, Some("bad")), "parse");
}

#[test]
#[should_panic(expected = "no error found: parse")]
fn test_expect_err_call_ok() {
	expect_err((0, None::<&str>), "parse");
}

#[test]
fn test_unchecked() {
	assert_eq!(unchecked((10, None::<&str>)), 10);
	assert_eq!(unchecked(("hello", None::<&str>)), "hello");

	// The value slot comes back even when an error is present.
	assert_eq!(unchecked(crate::divide(4, 0)), 0);
	assert!(unwrap_err_unchecked((10, None::<&str>)).is_none());
	assert_eq!(unwrap_err_unchecked((0, Some("bad"))), Some("bad"));
}

#[test]
fn test_raw() {
	assert_eq!(raw(crate::divide(4, 0)).or(2), 2);
	assert_eq!(raw(wrap(7, None::<&str>)), wrap(7, None));
}
