// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Library search configuration.

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::platform::Platform;

/// Environment variable holding extra library paths to try first.
pub const LIBRARY_ENV: &str = "LOOM_GETTEXT_LIBRARY";

/// Where to look for the native gettext library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryConfig {
	/// Paths tried before the platform's built-in candidates.
	pub overrides: Vec<PathBuf>,
}

impl LibraryConfig {
	/// Read overrides from `LOOM_GETTEXT_LIBRARY`.
	pub fn from_env() -> Self {
		match std::env::var_os(LIBRARY_ENV) {
			Some(value) => Self::from_value(&value),
			None => Self::default(),
		}
	}

	/// Parse a path list separated by the platform's path separator.
	pub fn from_value(value: &OsStr) -> Self {
		let overrides = std::env::split_paths(value)
			.filter(|path| !path.as_os_str().is_empty())
			.collect();
		Self { overrides }
	}

	/// Overrides followed by the platform defaults, without duplicates.
	pub fn candidates(&self, platform: Platform) -> Vec<String> {
		let mut candidates: Vec<String> = self
			.overrides
			.iter()
			.map(|path| path.to_string_lossy().into_owned())
			.collect();
		for name in platform.library_candidates() {
			if !candidates.iter().any(|c| c == name) {
				candidates.push((*name).to_string());
			}
		}
		candidates
	}
}
