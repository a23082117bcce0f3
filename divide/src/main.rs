use std::env;
use std::num::ParseIntError;
use std::process::ExitCode;

use log::{error, info, warn};
use unwrap::error::*;
use unwrap::{raw, Error};

/// Integer division in the dual-return convention.
fn divide(a: i64, b: i64) -> (i64, Option<Error>) {
	match a.checked_div(b) {
		Some(q) => (q, None),
		None if b == 0 => (0, Some("division by zero".into())),
		None => (0, Some("quotient overflows".into())),
	}
}

/// Parses a command-line operand.
fn operand(arg: &str) -> unwrap::Result<i64, ParseIntError> {
	raw(arg.trim().parse::<i64>().dual())
}

fn run() -> Result {
	let mut args = env::args().skip(1);

	let (Some(a), Some(b)) = (args.next(), args.next()) else {
		error!("usage: divide <dividend> <divisor>");
		return Err(());
	};

	let a = operand(&a).ok_or(|err| error!("Invalid dividend {a:?}: {err}")).ok_or(())?;
	let b = operand(&b).ok_or(|err| error!("Invalid divisor {b:?}: {err}")).ok_or(())?;

	let res = raw(divide(a, b));

	match res.err() {
		None => info!("{a} / {b} = {}", res.value()),
		Some(err) => warn!("{a} / {b} failed: {err}"),
	}

	println!("{}", res.unwrap_or_default());

	Ok(())
}

fn main() -> ExitCode {
	if runtime::init().is_err() {
		return ExitCode::FAILURE;
	}

	match run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(()) => ExitCode::FAILURE,
	}
}

#[test]
fn test_divide() {
	assert_eq!(unwrap::unwrap(divide(4, 2)), 2);
	assert_eq!(unwrap::raw(divide(4, 0)).unwrap_or_default(), 0);
	assert_eq!(unwrap::unwrap_err(divide(4, 0)).to_string(), "division by zero");
	assert_eq!(unwrap::unwrap_err(divide(i64::MIN, -1)).to_string(), "quotient overflows");
}

#[test]
fn test_operand() {
	assert_eq!(operand(" 12 ").unwrap(), 12);
	assert!(operand("twelve").is_err());
	assert_eq!(operand("twelve").unwrap_or(-1), -1);
}
