/*
SPDX-License-Identifier: Apache-2.0 OR MIT

Copyright 2026 The Clipfix contributors

The project to which this file belongs is licensed under either of
the Apache 2.0 or the MIT license at the licensee's choice. The terms
and conditions of the chosen license apply to this file.
*/

//! Fixes a macOS clipboard annoyance: copying or dragging an image out of a
//! browser puts both the image bytes and the source URL (as plain text) on
//! the pasteboard, which confuses applications that prefer the text
//! representation when pasting.
//!
//! The crate polls the general pasteboard, and whenever an image type and a
//! plain-text type are present together without a file-list type (so ordinary
//! Finder copies are left alone), it rewrites the pasteboard to hold only the
//! image bytes.
//!
//! The OS pasteboard is modeled as the [`Pasteboard`] capability so the
//! detection and rewrite logic runs unchanged against the in-memory fake used
//! by the tests; [`platform::SystemPasteboard`] is the only platform-coupled
//! piece.

mod error;

pub mod detector;
pub mod fixer;
pub mod monitor;
pub mod pasteboard;
pub mod platform;

pub use error::{Error, Result};
pub use monitor::{CancelToken, Monitor, PollOutcome};
pub use pasteboard::{InMemoryPasteboard, Pasteboard, Snapshot};
pub use platform::SystemPasteboard;
