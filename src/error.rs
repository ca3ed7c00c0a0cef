/*
SPDX-License-Identifier: Apache-2.0 OR MIT

Copyright 2026 The Clipfix contributors

The project to which this file belongs is licensed under either of
the Apache 2.0 or the MIT license at the licensee's choice. The terms
and conditions of the chosen license apply to this file.
*/

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by pasteboard operations.
///
/// Only [`Error::ClipboardNotSupported`] is fatal, and only at startup;
/// read and write failures are logged by the poll loop and the next poll
/// cycle serves as the retry.
#[derive(Debug, Error)]
pub enum Error {
	/// The OS pasteboard could not be acquired at all. This can happen in
	/// some daemon contexts (e.g. under launchd in certain modes) where
	/// the pasteboard server is unavailable.
	#[error("the operating system clipboard is not available in this context")]
	ClipboardNotSupported,

	/// Reading the change count, the type list, or representation bytes
	/// failed.
	#[error("failed to read from the pasteboard: {0}")]
	Read(String),

	/// Clearing the pasteboard or writing representation bytes failed.
	#[error("failed to write to the pasteboard: {0}")]
	Write(String),
}
