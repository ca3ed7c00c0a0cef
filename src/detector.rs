/*
SPDX-License-Identifier: Apache-2.0 OR MIT

Copyright 2026 The Clipfix contributors

The project to which this file belongs is licensed under either of
the Apache 2.0 or the MIT license at the licensee's choice. The terms
and conditions of the chosen license apply to this file.
*/

//! The trigger rule: image and plain text together, without a file list.
//!
//! A browser image copy puts the image bytes and the source URL (as plain
//! text) on the pasteboard at the same time. A Finder file copy can also
//! carry an image preview next to plain text, but it declares a file-url
//! type as well, and rewriting those would break ordinary copy/paste of
//! files. The rule therefore requires the file-list type to be absent.

use crate::pasteboard::types;

/// An image representation (TIFF or PNG) is declared.
pub fn has_image(declared: &[String]) -> bool {
	declared.iter().any(|t| t == types::TIFF || t == types::PNG)
}

/// A plain-text representation is declared. In the browser-copy scenario
/// this is the source URL, but any plain text counts.
pub fn has_plain_text(declared: &[String]) -> bool {
	declared.iter().any(|t| t == types::PLAIN_TEXT)
}

/// A file-list representation is declared, i.e. this looks like a file
/// copy rather than an image copy.
pub fn has_file(declared: &[String]) -> bool {
	declared.iter().any(|t| t == types::FILE_URL || t == types::FILE_PATH_LEGACY)
}

/// Whether the declared type set matches the pattern the fixer should
/// rewrite.
pub fn should_fix(declared: &[String]) -> bool {
	has_image(declared) && has_plain_text(declared) && !has_file(declared)
}
