/*
SPDX-License-Identifier: Apache-2.0 OR MIT

Copyright 2026 The Clipfix contributors

The project to which this file belongs is licensed under either of
the Apache 2.0 or the MIT license at the licensee's choice. The terms
and conditions of the chosen license apply to this file.
*/

//! The corrective action: rewrite the pasteboard to hold only the image.

use log::debug;

use crate::error::Result;
use crate::pasteboard::{types, Pasteboard};

/// Rewrites the pasteboard so that only its image representation remains.
///
/// Reads the image bytes first, TIFF preferred with PNG as the fallback.
/// If neither representation is present the pasteboard is left untouched
/// and `Ok(None)` is returned; clearing is only allowed once the image
/// bytes are in hand, since the clear is destructive.
///
/// On success returns the post-write change count, which the caller must
/// remember so the rewritten state is not treated as a fresh clipboard
/// change on the next poll.
pub fn isolate_image<P: Pasteboard + ?Sized>(pasteboard: &mut P) -> Result<Option<i64>> {
	let Some((uti, data)) = read_image(pasteboard)? else {
		debug!("no TIFF or PNG representation found, leaving pasteboard untouched");
		return Ok(None);
	};

	debug!("rewriting pasteboard with {} bytes of {uti}", data.len());
	pasteboard.clear()?;
	pasteboard.set_data(uti, &data)?;
	Ok(Some(pasteboard.change_count()?))
}

/// The image representation to keep, under the UTI it was declared with.
fn read_image<P: Pasteboard + ?Sized>(pasteboard: &P) -> Result<Option<(&'static str, Vec<u8>)>> {
	for uti in [types::TIFF, types::PNG] {
		if let Some(data) = pasteboard.data_for_type(uti)? {
			return Ok(Some((uti, data)));
		}
	}
	Ok(None)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pasteboard::InMemoryPasteboard;

	#[test]
	fn keeps_only_the_tiff_representation() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[(types::TIFF, b"IMG"), (types::PLAIN_TEXT, b"https://example.com/cat.png")]);

		let count = isolate_image(&mut pb).unwrap();
		assert!(count.is_some());
		assert_eq!(pb.contents(), &[(types::TIFF.to_string(), b"IMG".to_vec())]);
	}

	#[test]
	fn prefers_tiff_over_png() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[
			(types::PNG, b"png-bytes"),
			(types::TIFF, b"tiff-bytes"),
			(types::PLAIN_TEXT, b"url"),
		]);

		isolate_image(&mut pb).unwrap();
		assert_eq!(pb.contents(), &[(types::TIFF.to_string(), b"tiff-bytes".to_vec())]);
	}

	#[test]
	fn falls_back_to_png() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[(types::PNG, b"IMG2"), (types::PLAIN_TEXT, b"url")]);

		isolate_image(&mut pb).unwrap();
		assert_eq!(pb.contents(), &[(types::PNG.to_string(), b"IMG2".to_vec())]);
	}

	#[test]
	fn without_image_data_the_pasteboard_is_untouched() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[(types::PLAIN_TEXT, b"just text")]);
		let count_before = pb.change_count().unwrap();

		assert!(isolate_image(&mut pb).unwrap().is_none());
		assert_eq!(pb.change_count().unwrap(), count_before);
		assert_eq!(pb.contents(), &[(types::PLAIN_TEXT.to_string(), b"just text".to_vec())]);
	}

	#[test]
	fn returns_the_post_write_change_count() {
		let mut pb = InMemoryPasteboard::new();
		pb.copy(&[(types::TIFF, b"IMG"), (types::PLAIN_TEXT, b"url")]);

		let count = isolate_image(&mut pb).unwrap().unwrap();
		assert_eq!(count, pb.change_count().unwrap());
	}
}
