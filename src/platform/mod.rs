/*
SPDX-License-Identifier: Apache-2.0 OR MIT

Copyright 2026 The Clipfix contributors

The project to which this file belongs is licensed under either of
the Apache 2.0 or the MIT license at the licensee's choice. The terms
and conditions of the chosen license apply to this file.
*/

//! The platform-coupled pasteboard binding.
//!
//! Only macOS has a real implementation; other targets get a stub whose
//! constructor reports [`crate::Error::ClipboardNotSupported`], so the crate
//! and its tests build everywhere while the binary remains macOS-only.

#[cfg(target_os = "macos")]
mod osx;
#[cfg(target_os = "macos")]
pub use osx::SystemPasteboard;

#[cfg(not(target_os = "macos"))]
mod unsupported;
#[cfg(not(target_os = "macos"))]
pub use unsupported::SystemPasteboard;
