use std::io::{self, Write};
use std::time::SystemTime;

use log::Level;
use nu_ansi_term::ansi::RESET;
use nu_ansi_term::{Color, Style};

/// Terminal logger writing one coloured line per record to stderr.
pub struct Logger;

impl Logger {
	fn color(level: Level) -> Color {
		match level {
			Level::Trace => Color::Purple,
			Level::Debug => Color::Blue,
			Level::Info => Color::Green,
			Level::Warn => Color::Yellow,
			Level::Error => Color::Red,
		}
	}

	/// Writes `<time> <level> <target>: <message>`.
	fn write(out: &mut impl Write, time: SystemTime, record: &log::Record) -> io::Result<()> {
		let time = humantime::format_rfc3339_nanos(time);

		let dim = Style::new().dimmed().prefix();

		writeln!(
			out,
			"{dim}{time}{RESET} {}{:5}{RESET} {}{}{RESET}{dim}:{RESET} {}",
			Self::color(record.level()).bold().prefix(),
			record.level(),
			Style::new().bold().prefix(),
			record.target(),
			record.args()
		)
	}
}

impl log::Log for Logger {
	fn enabled(&self, metadata: &log::Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &log::Record) {
		if !self.enabled(record.metadata()) {
			return;
		}

		// Nowhere left to report a failed write to stderr.
		let _ = Self::write(&mut io::stderr().lock(), SystemTime::now(), record);
	}

	fn flush(&self) {
		let _ = io::stderr().flush();
	}
}

#[test]
fn test_line() {
	let mut out = Vec::new();

	Logger::write(
		&mut out,
		SystemTime::UNIX_EPOCH,
		&log::Record::builder().level(Level::Warn).target("divide").args(format_args!("division by zero")).build(),
	)
	.unwrap();

	let line = String::from_utf8(out).unwrap();
	assert!(line.contains("1970-01-01T00:00:00.000000000Z"));
	assert!(line.contains("WARN "));
	assert!(line.contains("divide"));
	assert!(line.ends_with("division by zero\n"));
}
