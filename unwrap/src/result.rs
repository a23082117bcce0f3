use core::fmt::Display;
use core::result;

use crate::{free, Error};

/// A value paired with an optional error indicator.
///
/// The result is *Ok* when no error is present and *Err* otherwise. The value slot is always
/// populated: on an Err it holds whatever the failed call returned, usually the default of `T`.
/// Only the error slot decides the state, so a zero value is a perfectly good Ok payload.
///
/// All extraction methods consume the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Result` may carry an error which should be handled"]
pub struct Result<T, E = Error> {
	value: T,
	err: Option<E>,
}

impl<T, E> Result<T, E> {
	/// Stores the output of a dual-returning call verbatim.
	#[inline(always)]
	pub const fn new(value: T, err: Option<E>) -> Self {
		Self { value, err }
	}

	/// Returns `true` if no error is present.
	#[inline(always)]
	pub const fn is_ok(&self) -> bool {
		self.err.is_none()
	}

	/// Returns `true` if an error is present.
	#[inline(always)]
	pub const fn is_err(&self) -> bool {
		!self.is_ok()
	}

	/// The value slot, regardless of state.
	#[inline(always)]
	pub const fn value(&self) -> &T {
		&self.value
	}

	/// The error slot.
	#[inline(always)]
	pub const fn err(&self) -> Option<&E> {
		self.err.as_ref()
	}

	/// Splits the result back into the pair it was built from.
	#[inline(always)]
	pub fn into_parts(self) -> (T, Option<E>) {
		(self.value, self.err)
	}

	/// Converts into a standard library result, dropping the value slot on an Err.
	#[inline]
	pub fn into_result(self) -> result::Result<T, E> {
		match self.err {
			None => Ok(self.value),
			Some(err) => Err(err),
		}
	}

	/// Returns the contained value.
	///
	/// # Panics
	///
	/// Panics with `failed to unwrap: <error>` if an error is present.
	#[inline]
	#[track_caller]
	pub fn unwrap(self) -> T
	where
		E: Display,
	{
		free::unwrap(self)
	}

	/// Returns the contained error.
	///
	/// # Panics
	///
	/// Panics if no error is present.
	#[inline]
	#[track_caller]
	pub fn unwrap_err(self) -> E {
		free::unwrap_err(self)
	}

	/// Returns the contained value.
	///
	/// # Panics
	///
	/// Panics with `<msg> : <error>` if an error is present.
	#[inline]
	#[track_caller]
	pub fn expect(self, msg: &str) -> T
	where
		E: Display,
	{
		free::expect(self, msg)
	}

	/// Returns the contained error.
	///
	/// # Panics
	///
	/// Panics with `no error found: <msg>` if no error is present.
	#[inline]
	#[track_caller]
	pub fn expect_err(self, msg: &str) -> E {
		free::expect_err(self, msg)
	}

	/// Returns the contained value or `default`.
	///
	/// `default` is evaluated eagerly: when it is the result of a function call, that call runs
	/// whether or not an error is present. Use [`Result::unwrap_or_else_err`] to compute the
	/// fallback lazily.
	#[inline]
	pub fn unwrap_or(self, default: T) -> T {
		match self.err {
			None => self.value,
			Some(_) => default,
		}
	}

	/// Returns the contained value, or the result of `f` if an error is present.
	///
	/// Note that `f` receives the *value slot*, not the error. On an Err that is whatever the
	/// failed call returned alongside its error, typically a zero value. `f` only runs on an Err.
	/// For a fallback computed from the error, see [`Result::unwrap_or_else_err`].
	#[inline]
	pub fn unwrap_or_else<F: FnOnce(T) -> T>(self, f: F) -> T {
		match self.err {
			None => self.value,
			Some(_) => f(self.value),
		}
	}

	/// Returns the contained value, or the result of `f` applied to the error.
	#[inline]
	pub fn unwrap_or_else_err<F: FnOnce(E) -> T>(self, f: F) -> T {
		match self.err {
			None => self.value,
			Some(err) => f(err),
		}
	}

	/// Returns the contained value, or `T::default()` if an error is present.
	#[inline]
	pub fn unwrap_or_default(self) -> T
	where
		T: Default,
	{
		match self.err {
			None => self.value,
			Some(_) => T::default(),
		}
	}

	/// Returns the value slot without checking for an error.
	///
	/// On an Err the result is meaningless: it is whatever the failed call left in the value slot.
	#[inline(always)]
	pub fn unwrap_unchecked(self) -> T {
		free::unchecked(self)
	}

	/// Returns the error slot without checking for an error. On an Ok this is `None`.
	#[inline(always)]
	pub fn unwrap_err_unchecked(self) -> Option<E> {
		free::unwrap_err_unchecked(self)
	}

	/// Shorthand for [`Result::unwrap_or`].
	#[inline(always)]
	pub fn or(self, default: T) -> T {
		self.unwrap_or(default)
	}

	/// Shorthand for [`Result::unwrap_or_else`].
	#[inline(always)]
	pub fn or_else<F: FnOnce(T) -> T>(self, f: F) -> T {
		self.unwrap_or_else(f)
	}
}

impl<T, E> From<(T, Option<E>)> for Result<T, E> {
	#[inline(always)]
	fn from((value, err): (T, Option<E>)) -> Self {
		Self::new(value, err)
	}
}

impl<T: Default, E> From<result::Result<T, E>> for Result<T, E> {
	/// An Err stores `T::default()` in the value slot, as a dual-returning call would.
	#[inline]
	fn from(res: result::Result<T, E>) -> Self {
		match res {
			Ok(value) => Self::new(value, None),
			Err(err) => Self::new(T::default(), Some(err)),
		}
	}
}

impl<T, E> From<Result<T, E>> for result::Result<T, E> {
	#[inline(always)]
	fn from(res: Result<T, E>) -> Self {
		res.into_result()
	}
}

#[cfg(test)]
use crate::{divide, raw, wrap};

#[test]
fn test_state() {
	let ok = wrap(0, None::<&str>);
	assert!(ok.is_ok());
	assert!(!ok.is_err());

	let err = wrap(5, Some("bad"));
	assert!(err.is_err());
	assert!(!err.is_ok());
}

#[test]
fn test_ok_extraction() {
	let ok = || raw(divide(4, 2));

	assert_eq!(ok().unwrap(), 2);
	assert_eq!(ok().expect("uh oh"), 2);
	assert_eq!(ok().unwrap_or(7), 2);
	assert_eq!(ok().unwrap_or_else(|_| 7), 2);
	assert_eq!(ok().unwrap_or_else_err(|_| 7), 2);
	assert_eq!(ok().unwrap_or_default(), 2);
	assert_eq!(ok().unwrap_unchecked(), 2);
	assert!(ok().unwrap_err_unchecked().is_none());
}

#[test]
fn test_identity() {
	for v in ["", "a", "hello"] {
		assert_eq!(wrap(v, None::<&str>).unwrap(), v);
	}

	assert_eq!(wrap(vec![1, 2, 3], None::<&str>).unwrap(), [1, 2, 3]);
}

#[test]
fn test_err_fallback() {
	let (value, err) = divide(4, 0);
	assert_eq!(wrap(value, err).unwrap_or(2), 2);

	let (value, err) = divide(4, 0);
	assert_eq!(wrap(value, err).unwrap_or_default(), 0);

	assert_eq!(wrap(String::from("partial"), Some("bad")).unwrap_or_default(), "");
	assert_eq!(raw(divide(4, 0)).or(3), 3);
}

#[test]
fn test_unwrap_or_else_receives_value_slot() {
	// The callback sees the stored value, not the error.
	assert_eq!(wrap(10, Some("bad")).unwrap_or_else(|v| v * 2), 20);
	assert_eq!(wrap(4, Some("bad")).or_else(|v| v + 1), 5);
	assert_eq!(wrap(10, None::<&str>).unwrap_or_else(|_| unreachable!()), 10);
}

#[test]
fn test_unwrap_or_else_err() {
	assert_eq!(wrap(0, Some("bad")).unwrap_or_else_err(|e| e.len()), 3);
}

#[test]
#[should_panic(expected = "failed to unwrap: division by zero")]
fn test_unwrap_err_state() {
	raw(divide(4, 0)).unwrap();
}

#[test]
#[should_panic(expected = "uh oh : division by zero")]
fn test_expect() {
	raw(divide(4, 0)).expect("uh oh");
}

#[test]
fn test_unwrap_err() {
	assert_eq!(raw(divide(4, 0)).unwrap_err().to_string(), "division by zero");
	assert_eq!(wrap(0, Some("bad")).expect_err("should fail"), "bad");
}

#[test]
#[should_panic(expected = "failed to unwrap: error is absent")]
fn test_unwrap_err_ok_state() {
	raw(divide(4, 2)).unwrap_err();
}

#[test]
#[should_panic(expected = "no error found: should fail")]
fn test_expect_err() {
	raw(divide(4, 2)).expect_err("should fail");
}

#[test]
fn test_unchecked_err_state() {
	let err = wrap(42, Some("bad"));
	assert_eq!(err.unwrap_unchecked(), 42);
	assert_eq!(err.unwrap_err_unchecked(), Some("bad"));
}

#[test]
fn test_std_conversion() {
	let res: Result<i32, &str> = Err::<i32, &str>("bad").into();
	assert_eq!(res, wrap(0, Some("bad")));
	assert_eq!(res.into_result(), Err("bad"));

	let res: result::Result<i32, &str> = wrap(3, None::<&str>).into();
	assert_eq!(res, Ok(3));
	assert_eq!(wrap(3, Some("bad")).into_parts(), (3, Some("bad")));

	let res: Result<i32> = divide(4, 2).into();
	assert_eq!(res.unwrap(), 2);
}

#[test]
fn test_views() {
	let res = wrap(5, Some("bad"));
	assert_eq!(*res.value(), 5);
	assert_eq!(res.err(), Some(&"bad"));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
	let json = serde_json::to_string(&wrap(0, Some("division by zero"))).unwrap();
	assert_eq!(json, r#"{"value":0,"err":"division by zero"}"#);

	let res: Result<i32, String> = serde_json::from_str(r#"{"value":2,"err":null}"#).unwrap();
	assert_eq!(res.unwrap(), 2);
}
