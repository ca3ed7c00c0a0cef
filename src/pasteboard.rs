/*
SPDX-License-Identifier: Apache-2.0 OR MIT

Copyright 2026 The Clipfix contributors

The project to which this file belongs is licensed under either of
the Apache 2.0 or the MIT license at the licensee's choice. The terms
and conditions of the chosen license apply to this file.
*/

//! The clipboard capability consumed by the detector, fixer and monitor.
//!
//! Everything above the platform layer talks to the pasteboard through the
//! [`Pasteboard`] trait, so the whole pipeline can be exercised against
//! [`InMemoryPasteboard`] without an OS clipboard.

use std::cell::Cell;

use crate::error::Result;

/// Uniform type identifiers as AppKit declares them on the pasteboard.
pub mod types {
	/// `NSPasteboardTypeTIFF`, the primary format for screenshots and
	/// browser image copies.
	pub const TIFF: &str = "public.tiff";
	/// `NSPasteboardTypePNG`.
	pub const PNG: &str = "public.png";
	/// `NSPasteboardTypeString`; in the browser-copy scenario this holds
	/// the source URL.
	pub const PLAIN_TEXT: &str = "public.utf8-plain-text";
	/// `NSPasteboardTypeFileURL`, present on Finder file copies.
	pub const FILE_URL: &str = "public.file-url";
	/// Pre-`NSPasteboardTypeFileURL` spelling of a file path, still
	/// emitted by some applications.
	pub const FILE_PATH_LEGACY: &str = "public.file-path";
}

/// What one poll iteration sees: the OS change count and the declared
/// content types. Read fresh every iteration and discarded after the
/// detection check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
	pub change_count: i64,
	pub types: Vec<String>,
}

/// The pasteboard capability: enumerate content types, read representation
/// bytes by type, clear, write, and read the OS change count.
///
/// The change count is monotonically increasing and advances on every
/// write, including writes made by the holder of this capability itself.
pub trait Pasteboard {
	/// The OS change counter. Advances whenever any process takes
	/// ownership of the pasteboard.
	fn change_count(&self) -> Result<i64>;

	/// The content-type identifiers currently declared on the pasteboard.
	/// No side effects.
	fn types(&self) -> Result<Vec<String>>;

	/// Bytes of the representation declared under `uti`, or `None` when
	/// that type is not present.
	fn data_for_type(&self, uti: &str) -> Result<Option<Vec<u8>>>;

	/// Remove every representation from the pasteboard.
	fn clear(&mut self) -> Result<()>;

	/// Write one representation under `uti`.
	fn set_data(&mut self, uti: &str, data: &[u8]) -> Result<()>;
}

/// In-process stand-in for the OS pasteboard.
///
/// Behaves like `NSPasteboard` as far as the rest of the crate is
/// concerned: representations live under their UTI, and the change count
/// advances on every mutation. It additionally counts `data_for_type`
/// calls so tests can assert that the change-count guard short-circuits
/// before any representation bytes are read.
#[derive(Debug, Default)]
pub struct InMemoryPasteboard {
	items: Vec<(String, Vec<u8>)>,
	change_count: i64,
	data_reads: Cell<usize>,
}

impl InMemoryPasteboard {
	pub fn new() -> Self {
		Self::default()
	}

	/// Simulate another process copying: replaces the whole pasteboard
	/// with the given representations and advances the change count once,
	/// the way a single ownership change does.
	pub fn copy(&mut self, items: &[(&str, &[u8])]) {
		self.items = items.iter().map(|(uti, data)| (uti.to_string(), data.to_vec())).collect();
		self.change_count += 1;
	}

	/// Representations currently held, in insertion order.
	pub fn contents(&self) -> &[(String, Vec<u8>)] {
		&self.items
	}

	/// Number of `data_for_type` calls made so far.
	pub fn data_reads(&self) -> usize {
		self.data_reads.get()
	}
}

impl Pasteboard for InMemoryPasteboard {
	fn change_count(&self) -> Result<i64> {
		Ok(self.change_count)
	}

	fn types(&self) -> Result<Vec<String>> {
		Ok(self.items.iter().map(|(uti, _)| uti.clone()).collect())
	}

	fn data_for_type(&self, uti: &str) -> Result<Option<Vec<u8>>> {
		self.data_reads.set(self.data_reads.get() + 1);
		Ok(self.items.iter().find(|(t, _)| t == uti).map(|(_, data)| data.clone()))
	}

	fn clear(&mut self) -> Result<()> {
		self.items.clear();
		self.change_count += 1;
		Ok(())
	}

	fn set_data(&mut self, uti: &str, data: &[u8]) -> Result<()> {
		if let Some(entry) = self.items.iter_mut().find(|(t, _)| t == uti) {
			entry.1 = data.to_vec();
		} else {
			self.items.push((uti.to_string(), data.to_vec()));
		}
		self.change_count += 1;
		Ok(())
	}
}
