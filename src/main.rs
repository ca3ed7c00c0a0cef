/*
SPDX-License-Identifier: Apache-2.0 OR MIT

Copyright 2026 The Clipfix contributors

The project to which this file belongs is licensed under either of
the Apache 2.0 or the MIT license at the licensee's choice. The terms
and conditions of the chosen license apply to this file.
*/

//! Entry point for the `clipfix` binary: CLI parsing, logging setup,
//! termination signals, and the poll loop. Process lifecycle (start at
//! login, restart, log redirection) belongs to the service supervisor.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use clipfix::{CancelToken, Monitor, SystemPasteboard};

/// Fixes macOS clipboard entries that carry both an image and its source
/// URL by rewriting them to hold only the image.
#[derive(Parser, Debug)]
#[command(name = "clipfix", version, about, long_about = None)]
struct Args {
	/// Enable debug-level logging.
	#[arg(long)]
	debug: bool,

	/// Polling interval in seconds between clipboard checks.
	#[arg(short, long, default_value_t = 1.0, value_parser = parse_interval)]
	interval: f64,
}

fn parse_interval(value: &str) -> Result<f64, String> {
	let seconds: f64 = value.parse().map_err(|_| format!("`{value}` is not a number"))?;
	if !seconds.is_finite() || seconds <= 0.0 {
		return Err("the interval must be a positive number of seconds".into());
	}
	Ok(seconds)
}

fn init_logging(debug: bool) {
	// RUST_LOG still wins over the CLI flag when set.
	let default_level = if debug { "debug" } else { "info" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
		.init();
}

#[cfg(unix)]
mod signals {
	use std::sync::OnceLock;

	use nix::libc::c_int;
	use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

	use clipfix::CancelToken;

	static CANCEL: OnceLock<CancelToken> = OnceLock::new();

	extern "C" fn on_termination(_signal: c_int) {
		// Only atomic stores happen here, which is async-signal-safe. The
		// poll loop notices the flag after its current sleep.
		if let Some(cancel) = CANCEL.get() {
			cancel.cancel();
		}
	}

	pub fn install(cancel: CancelToken) -> nix::Result<()> {
		let _ = CANCEL.set(cancel);
		let action =
			SigAction::new(SigHandler::Handler(on_termination), SaFlags::empty(), SigSet::empty());
		unsafe {
			sigaction(Signal::SIGINT, &action)?;
			sigaction(Signal::SIGTERM, &action)?;
		}
		Ok(())
	}
}

fn main() -> ExitCode {
	let args = Args::parse();
	init_logging(args.debug);

	// The one fatal error: without the pasteboard capability there is
	// nothing to poll.
	let pasteboard = match SystemPasteboard::new() {
		Ok(pasteboard) => pasteboard,
		Err(err) => {
			error!("cannot acquire the system pasteboard: {err}");
			return ExitCode::FAILURE;
		}
	};

	let cancel = CancelToken::new();
	#[cfg(unix)]
	if let Err(err) = signals::install(cancel.clone()) {
		error!("failed to install signal handlers: {err}");
		return ExitCode::FAILURE;
	}

	info!("clipboard fixer running, poll interval {}s, press Ctrl+C to stop", args.interval);
	let mut monitor = Monitor::new(pasteboard, Duration::from_secs_f64(args.interval));
	monitor.run(&cancel);

	info!("stopped");
	ExitCode::SUCCESS
}
