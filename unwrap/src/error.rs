#[doc(hidden)]
pub trait Ext<T, E> {
	/// Hands the error, if any, to `f` and returns the value otherwise.
	fn ok_or(self, f: impl FnOnce(E)) -> Option<T>;
}

impl<T, E> Ext<T, E> for result::Result<T, E> {
	fn ok_or(self, f: impl FnOnce(E)) -> Option<T> {
		match self {
			Ok(v) => Some(v),
			Err(e) => {
				f(e);
				None
			}
		}
	}
}

impl<T, E> Ext<T, E> for (T, Option<E>) {
	fn ok_or(self, f: impl FnOnce(E)) -> Option<T> {
		match self {
			(v, None) => Some(v),
			(_, Some(e)) => {
				f(e);
				None
			}
		}
	}
}

impl<T, E> Ext<T, E> for crate::Result<T, E> {
	fn ok_or(self, f: impl FnOnce(E)) -> Option<T> {
		self.into_parts().ok_or(f)
	}
}

#[doc(hidden)]
pub trait ExtDual<T, E> {
	/// Converts to the dual-return convention, storing `T::default()` beside an error.
	fn dual(self) -> (T, Option<E>);
}

impl<T: Default, E> ExtDual<T, E> for result::Result<T, E> {
	fn dual(self) -> (T, Option<E>) {
		crate::Result::<T, E>::from(self).into_parts()
	}
}

/// Unit-error result for code that reports failures at the site, usually with `log::error!`.
pub type Result<T = (), E = ()> = result::Result<T, E>;

use core::result;

pub use Ext as _;
pub use ExtDual as _;

#[test]
fn test_ok_or() {
	let mut seen = None;

	assert_eq!(crate::divide(4, 2).ok_or(|_| unreachable!()), Some(2));
	assert_eq!(crate::divide(4, 0).ok_or(|e| seen = Some(e.to_string())), None);
	assert_eq!(seen.as_deref(), Some("division by zero"));

	assert_eq!("7".parse::<u8>().ok_or(|_| unreachable!()), Some(7));
	assert_eq!("x".parse::<u8>().ok_or(|_| {}), None);
	assert_eq!(crate::wrap(3, Some("bad")).ok_or(|_| {}), None);
}

#[test]
fn test_dual() {
	let (value, err) = "x".parse::<u8>().dual();
	assert_eq!(value, 0);
	assert!(err.is_some());

	assert_eq!(crate::unwrap("12".parse::<u8>().dual()), 12);
}
