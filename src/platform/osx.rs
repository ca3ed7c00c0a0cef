/*
SPDX-License-Identifier: Apache-2.0 OR MIT

Copyright 2026 The Clipfix contributors

The project to which this file belongs is licensed under either of
the Apache 2.0 or the MIT license at the licensee's choice. The terms
and conditions of the chosen license apply to this file.
*/

use std::ptr::NonNull;

use objc2::{
	msg_send_id,
	rc::{autoreleasepool, Id},
	ClassType,
};
use objc2_app_kit::NSPasteboard;
use objc2_foundation::{NSData, NSString};

use crate::error::{Error, Result};
use crate::pasteboard::Pasteboard;

/// The general `NSPasteboard`, exposed through the [`Pasteboard`] contract.
pub struct SystemPasteboard {
	pasteboard: Id<NSPasteboard>,
}

impl SystemPasteboard {
	pub fn new() -> Result<Self> {
		// `generalPasteboard` first appeared in 10.0, so it should always
		// be available.
		//
		// However, in some edge cases, like running under launchd (in some
		// modes) as a daemon, the pasteboard object may be unavailable, and
		// then `generalPasteboard` will return NULL even though it's
		// documented not to.
		//
		// Otherwise we'd just use `NSPasteboard::generalPasteboard()` here.
		let pasteboard: Option<Id<NSPasteboard>> =
			unsafe { msg_send_id![NSPasteboard::class(), generalPasteboard] };

		match pasteboard {
			Some(pasteboard) => Ok(Self { pasteboard }),
			None => Err(Error::ClipboardNotSupported),
		}
	}
}

impl Pasteboard for SystemPasteboard {
	fn change_count(&self) -> Result<i64> {
		Ok(unsafe { self.pasteboard.changeCount() } as i64)
	}

	fn types(&self) -> Result<Vec<String>> {
		// The returned type strings are autoreleased; copy them out before
		// the pool drains.
		autoreleasepool(|_| {
			let types = unsafe { self.pasteboard.types() }
				.ok_or_else(|| Error::Read("NSPasteboard#types returned null".into()))?;
			Ok(types.iter().map(|uti| uti.to_string()).collect())
		})
	}

	fn data_for_type(&self, uti: &str) -> Result<Option<Vec<u8>>> {
		// `dataForType:` answers nil both when the type is missing and when
		// the owning application fails to provide the promised data; either
		// way there is nothing usable to read.
		autoreleasepool(|_| {
			let data = unsafe { self.pasteboard.dataForType(&NSString::from_str(uti)) };
			Ok(data.map(|data| data.bytes().to_vec()))
		})
	}

	fn clear(&mut self) -> Result<()> {
		unsafe { self.pasteboard.clearContents() };
		Ok(())
	}

	fn set_data(&mut self, uti: &str, data: &[u8]) -> Result<()> {
		let success = unsafe {
			let nsdata = NSData::dataWithBytesNoCopy_length(
				NonNull::new_unchecked(data.as_ptr() as _),
				data.len() as _,
			);
			self.pasteboard.setData_forType(Some(&nsdata), &NSString::from_str(uti))
		};
		if success {
			Ok(())
		} else {
			Err(Error::Write(format!("NSPasteboard#setData:forType: returned false for {uti}")))
		}
	}
}
