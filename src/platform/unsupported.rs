/*
SPDX-License-Identifier: Apache-2.0 OR MIT

Copyright 2026 The Clipfix contributors

The project to which this file belongs is licensed under either of
the Apache 2.0 or the MIT license at the licensee's choice. The terms
and conditions of the chosen license apply to this file.
*/

use crate::error::{Error, Result};
use crate::pasteboard::Pasteboard;

/// Stub for targets without an NSPasteboard. Construction always fails,
/// so none of the trait methods can ever be reached.
pub struct SystemPasteboard {
	_private: (),
}

impl SystemPasteboard {
	pub fn new() -> Result<Self> {
		Err(Error::ClipboardNotSupported)
	}
}

impl Pasteboard for SystemPasteboard {
	fn change_count(&self) -> Result<i64> {
		Err(Error::ClipboardNotSupported)
	}

	fn types(&self) -> Result<Vec<String>> {
		Err(Error::ClipboardNotSupported)
	}

	fn data_for_type(&self, _uti: &str) -> Result<Option<Vec<u8>>> {
		Err(Error::ClipboardNotSupported)
	}

	fn clear(&mut self) -> Result<()> {
		Err(Error::ClipboardNotSupported)
	}

	fn set_data(&mut self, _uti: &str, _data: &[u8]) -> Result<()> {
		Err(Error::ClipboardNotSupported)
	}
}
