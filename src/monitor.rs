/*
SPDX-License-Identifier: Apache-2.0 OR MIT

Copyright 2026 The Clipfix contributors

The project to which this file belongs is licensed under either of
the Apache 2.0 or the MIT license at the licensee's choice. The terms
and conditions of the chosen license apply to this file.
*/

//! The sleep/poll loop driving detection and rewrite.
//!
//! One iteration is strictly linear: read the change count, bail out if the
//! pasteboard has not changed, enumerate the types, run the detector, run
//! the fixer. The loop itself only adds the interval sleep and the
//! cancellation check, so a single iteration is testable without timers
//! through [`Monitor::poll_once`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::detector;
use crate::error::Result;
use crate::fixer;
use crate::pasteboard::{Pasteboard, Snapshot};

/// Cooperative cancellation flag shared between the poll loop and the
/// signal handler. The current sleep is allowed to finish; there is no
/// state to flush on exit.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
	flag: Arc<AtomicBool>,
}

impl CancelToken {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cancel(&self) {
		self.flag.store(true, Ordering::SeqCst);
	}

	pub fn is_cancelled(&self) -> bool {
		self.flag.load(Ordering::SeqCst)
	}
}

/// What a single poll iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
	/// Change count matched the previous poll; nothing was read.
	Unchanged,
	/// The pasteboard changed but does not match the trigger pattern.
	Ignored,
	/// The trigger pattern matched and the pasteboard was rewritten to
	/// hold only the image.
	Fixed,
	/// The trigger pattern matched but neither a TIFF nor a PNG
	/// representation could be read; the pasteboard was left untouched.
	NoImage,
}

/// Polls a [`Pasteboard`] at a fixed interval and rewrites it whenever the
/// image-plus-text pattern shows up.
#[derive(Debug)]
pub struct Monitor<P> {
	pasteboard: P,
	interval: Duration,
	last_change: Option<i64>,
}

impl<P: Pasteboard> Monitor<P> {
	pub fn new(pasteboard: P, interval: Duration) -> Self {
		Self { pasteboard, interval, last_change: None }
	}

	/// One linear poll iteration.
	///
	/// The change-count guard runs first: when the count matches the
	/// previous poll no types and no representation bytes are read. The
	/// guard also recognizes our own corrective write, because
	/// [`fixer::isolate_image`] hands back the post-write count and it is
	/// recorded here; without that the rewrite would re-trigger forever.
	pub fn poll_once(&mut self) -> Result<PollOutcome> {
		let change_count = self.pasteboard.change_count()?;
		if self.last_change == Some(change_count) {
			return Ok(PollOutcome::Unchanged);
		}

		let snapshot = Snapshot { change_count, types: self.pasteboard.types()? };
		self.last_change = Some(snapshot.change_count);
		debug!("pasteboard changed (count {}): {:?}", snapshot.change_count, snapshot.types);

		if !detector::should_fix(&snapshot.types) {
			debug!("type set does not match the image+text pattern, ignoring");
			return Ok(PollOutcome::Ignored);
		}

		info!("detected image + text pattern, rewriting pasteboard");
		match fixer::isolate_image(&mut self.pasteboard)? {
			Some(count) => {
				self.last_change = Some(count);
				Ok(PollOutcome::Fixed)
			}
			None => Ok(PollOutcome::NoImage),
		}
	}

	/// The underlying pasteboard.
	pub fn pasteboard(&self) -> &P {
		&self.pasteboard
	}

	pub fn pasteboard_mut(&mut self) -> &mut P {
		&mut self.pasteboard
	}

	/// The sleep/poll loop. Runs until `cancel` is tripped; a failed
	/// iteration is logged and the next interval is the retry.
	pub fn run(&mut self, cancel: &CancelToken) {
		while !cancel.is_cancelled() {
			match self.poll_once() {
				Ok(PollOutcome::Fixed) => info!("re-copied image only to clipboard"),
				Ok(PollOutcome::NoImage) => {
					warn!("image + text pattern matched but no TIFF or PNG data was readable");
				}
				Ok(PollOutcome::Unchanged | PollOutcome::Ignored) => {}
				Err(err) => warn!("poll iteration failed: {err}"),
			}
			thread::sleep(self.interval);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pasteboard::{types, InMemoryPasteboard};

	fn monitor(pb: InMemoryPasteboard) -> Monitor<InMemoryPasteboard> {
		Monitor::new(pb, Duration::from_millis(1))
	}

	#[test]
	fn rewrites_browser_image_copy() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[(types::TIFF, b"IMG"), (types::PLAIN_TEXT, b"https://example.com/cat.png")]);
		let mut monitor = monitor(pb);

		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::Fixed);
		assert_eq!(
			monitor.pasteboard.contents(),
			&[(types::TIFF.to_string(), b"IMG".to_vec())]
		);
	}

	#[test]
	fn own_rewrite_does_not_retrigger() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[(types::PNG, b"IMG2"), (types::PLAIN_TEXT, b"url")]);
		let mut monitor = monitor(pb);

		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::Fixed);
		// The corrective write advanced the change count, but the monitor
		// recorded the post-write count: the next poll must short-circuit.
		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::Unchanged);
	}

	#[test]
	fn unchanged_pasteboard_reads_no_data() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[(types::TIFF, b"IMG"), (types::PLAIN_TEXT, b"url")]);
		let mut monitor = monitor(pb);

		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::Fixed);
		let reads = monitor.pasteboard.data_reads();

		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::Unchanged);
		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::Unchanged);
		assert_eq!(monitor.pasteboard.data_reads(), reads);
	}

	#[test]
	fn ignores_finder_copy() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[
			(types::TIFF, b"preview"),
			(types::PLAIN_TEXT, b"/Users/me/cat.png"),
			(types::FILE_URL, b"file:///Users/me/cat.png"),
		]);
		let mut monitor = monitor(pb);

		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::Ignored);
		assert_eq!(monitor.pasteboard.contents().len(), 3);
	}

	#[test]
	fn ignores_plain_text_copy() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[(types::PLAIN_TEXT, b"hello")]);
		let mut monitor = monitor(pb);

		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::Ignored);
	}

	#[test]
	fn reports_missing_image_data_without_clearing() {
		// Types declare a TIFF but the data read comes back empty, the
		// way a lazily-promised representation can. The pasteboard must
		// not be cleared.
		#[derive(Debug, Default)]
		struct PromisedTiff {
			inner: InMemoryPasteboard,
		}

		impl Pasteboard for PromisedTiff {
			fn change_count(&self) -> crate::Result<i64> {
				self.inner.change_count()
			}
			fn types(&self) -> crate::Result<Vec<String>> {
				Ok(vec![types::TIFF.to_string(), types::PLAIN_TEXT.to_string()])
			}
			fn data_for_type(&self, _uti: &str) -> crate::Result<Option<Vec<u8>>> {
				Ok(None)
			}
			fn clear(&mut self) -> crate::Result<()> {
				panic!("must not clear without image bytes in hand");
			}
			fn set_data(&mut self, uti: &str, data: &[u8]) -> crate::Result<()> {
				self.inner.set_data(uti, data)
			}
		}

		let mut fake = PromisedTiff::default();
		fake.inner.copy(&[(types::PLAIN_TEXT, b"url")]);
		let mut monitor = Monitor::new(fake, Duration::from_millis(1));

		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::NoImage);
	}

	#[test]
	fn new_copy_after_fix_is_processed() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[(types::TIFF, b"IMG"), (types::PLAIN_TEXT, b"url")]);
		let mut monitor = monitor(pb);

		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::Fixed);
		monitor.pasteboard.copy(&[(types::PLAIN_TEXT, b"second copy")]);
		assert_eq!(monitor.poll_once().unwrap(), PollOutcome::Ignored);
	}

	#[test]
	fn cancel_token_round_trip() {
		let token = CancelToken::new();
		assert!(!token.is_cancelled());

		let clone = token.clone();
		clone.cancel();
		assert!(token.is_cancelled());
	}
}
