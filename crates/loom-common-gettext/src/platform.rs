// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Operating system identification and the `LC_ALL` category code.
//!
//! The numeric value of `LC_ALL` is not portable. BSD libc (and therefore
//! macOS) and the Windows UCRT define it as `0`, while glibc and musl define
//! it as `6`. Passing the wrong value to `setlocale` silently changes a
//! single category instead of all of them.

use std::fmt;
use std::os::raw::c_int;

use crate::error::{GettextError, Result};

/// `LC_ALL` on BSD-derived systems (including macOS) and Windows.
pub const LC_ALL_BSD: c_int = 0;

/// `LC_ALL` on glibc and musl Linux.
pub const LC_ALL_LINUX: c_int = 6;

/// Operating system families with a known gettext ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
	Linux,
	MacOs,
	Windows,
	FreeBsd,
	OpenBsd,
	NetBsd,
	DragonFly,
}

impl Platform {
	pub const ALL: [Platform; 7] = [
		Platform::Linux,
		Platform::MacOs,
		Platform::Windows,
		Platform::FreeBsd,
		Platform::OpenBsd,
		Platform::NetBsd,
		Platform::DragonFly,
	];

	/// Identify the platform this process was compiled for.
	pub fn current() -> Result<Self> {
		Self::from_os(std::env::consts::OS)
	}

	/// Map a `std::env::consts::OS` string to a platform.
	pub fn from_os(os: &str) -> Result<Self> {
		match os {
			"linux" => Ok(Platform::Linux),
			"macos" => Ok(Platform::MacOs),
			"windows" => Ok(Platform::Windows),
			"freebsd" => Ok(Platform::FreeBsd),
			"openbsd" => Ok(Platform::OpenBsd),
			"netbsd" => Ok(Platform::NetBsd),
			"dragonfly" => Ok(Platform::DragonFly),
			other => Err(GettextError::UnsupportedPlatform {
				os: other.to_string(),
			}),
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Platform::Linux => "linux",
			Platform::MacOs => "macos",
			Platform::Windows => "windows",
			Platform::FreeBsd => "freebsd",
			Platform::OpenBsd => "openbsd",
			Platform::NetBsd => "netbsd",
			Platform::DragonFly => "dragonfly",
		}
	}

	/// The value the native `setlocale` expects for "every category".
	pub fn lc_all(&self) -> c_int {
		match self {
			Platform::Linux => LC_ALL_LINUX,
			Platform::MacOs
			| Platform::Windows
			| Platform::FreeBsd
			| Platform::OpenBsd
			| Platform::NetBsd
			| Platform::DragonFly => LC_ALL_BSD,
		}
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Resolve `LC_ALL` for an OS name, failing for platforms without a mapping.
pub fn lc_all_for(os: &str) -> Result<c_int> {
	Platform::from_os(os).map(|platform| platform.lc_all())
}
