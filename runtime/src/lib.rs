use std::env;

use log::LevelFilter;
use unwrap::error::*;

/// Terminal output for the `log` facade.
pub mod logger;

pub use logger::Logger;

/// Environment variable holding the maximum log level.
pub const LEVEL_VAR: &str = "LOG";

/// Level used when `LOG` is unset or invalid.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Parses a `LOG` value. Level names are case-insensitive.
pub fn level(var: &str) -> Option<LevelFilter> {
	var.trim().parse::<LevelFilter>().ok_or(|err| log::warn!("Ignoring {LEVEL_VAR}={var:?}: {err}"))
}

/// Installs the terminal logger and applies the level from `LOG`.
pub fn init() -> Result {
	// No logger to report through yet.
	log::set_logger(&Logger).map_err(|err| eprintln!("Error occurred while installing the logger: {err}"))?;

	log::set_max_level(DEFAULT_LEVEL);

	if let Some(max) = env::var(LEVEL_VAR).ok().as_deref().and_then(level) {
		log::set_max_level(max);
	}

	Ok(())
}

#[test]
fn test_level() {
	assert_eq!(level("debug"), Some(LevelFilter::Debug));
	assert_eq!(level("WARN"), Some(LevelFilter::Warn));
	assert_eq!(level(" off "), Some(LevelFilter::Off));
	assert_eq!(level("loud"), None);
}
