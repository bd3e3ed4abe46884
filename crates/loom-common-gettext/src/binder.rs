// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One-time, process-wide binding of the native library.

use once_cell::sync::OnceCell;

use crate::config::LibraryConfig;
use crate::error::{GettextError, Result};
use crate::loader;
use crate::platform::Platform;
use crate::symbols::NativeGettext;

/// A cell that runs its bind closure at most once and remembers the
/// outcome, including failure.
///
/// Concurrent first callers block until the winning closure finishes and
/// then all observe the same result.
#[derive(Debug)]
pub struct BindOnce<T> {
	cell: OnceCell<std::result::Result<T, GettextError>>,
}

impl<T> BindOnce<T> {
	pub const fn new() -> Self {
		Self {
			cell: OnceCell::new(),
		}
	}

	pub fn get_or_bind<F>(&self, bind: F) -> Result<&T>
	where
		F: FnOnce() -> Result<T>,
	{
		self.cell.get_or_init(bind).as_ref().map_err(Clone::clone)
	}

	/// The bound value, if a bind has already succeeded.
	pub fn get(&self) -> Option<&T> {
		self.cell.get().and_then(|outcome| outcome.as_ref().ok())
	}
}

impl<T> Default for BindOnce<T> {
	fn default() -> Self {
		Self::new()
	}
}

static NATIVE: BindOnce<NativeGettext> = BindOnce::new();

/// Load and bind the native gettext library on first use.
///
/// Later calls return the cached library, or the cached error if the first
/// attempt failed.
pub fn ensure_bound() -> Result<&'static NativeGettext> {
	NATIVE.get_or_bind(|| bind_native(&LibraryConfig::from_env()))
}

/// The native library, if `ensure_bound` has already succeeded.
pub fn bound() -> Option<&'static NativeGettext> {
	NATIVE.get()
}

fn bind_native(config: &LibraryConfig) -> Result<NativeGettext> {
	let platform = Platform::current()?;
	let candidates = config.candidates(platform);
	tracing::debug!(platform = %platform, candidates = ?candidates, "loading gettext library");

	let loaded = loader::open_first(&candidates)?;
	NativeGettext::bind(loaded, platform)
}
