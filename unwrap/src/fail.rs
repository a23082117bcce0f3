//! Panic messages for the fatal extractors. Methods and free functions both end up here.

use core::fmt::Display;

#[track_caller]
pub(crate) fn unwrap_failed(err: &dyn Display) -> ! {
	panic!("failed to unwrap: {err}")
}

#[track_caller]
pub(crate) fn unwrap_err_failed() -> ! {
	panic!("failed to unwrap: error is absent")
}

#[track_caller]
pub(crate) fn expect_failed(msg: &str, err: &dyn Display) -> ! {
	panic!("{msg} : {err}")
}

#[track_caller]
pub(crate) fn expect_err_failed(msg: &str) -> ! {
	panic!("no error found: {msg}")
}
