// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Candidate library names per platform, most likely first.

use crate::platform::Platform;

// glibc and musl ship gettext inside libc; libintl covers other libcs.
const LINUX: &[&str] = &["libc.so.6", "libc.so", "libintl.so.8", "libintl.so"];

const MACOS: &[&str] = &[
	"libintl.8.dylib",
	"/opt/homebrew/lib/libintl.8.dylib",
	"/usr/local/lib/libintl.8.dylib",
	"/opt/local/lib/libintl.8.dylib",
];

const WINDOWS: &[&str] = &["libintl-8.dll", "intl.dll", "libintl.dll"];

const FREEBSD: &[&str] = &["libintl.so.8", "/usr/local/lib/libintl.so.8", "libintl.so"];

// NetBSD's libc provides the gettext family.
const NETBSD: &[&str] = &["libintl.so.1", "libc.so", "/usr/pkg/lib/libintl.so.8"];

const OPENBSD: &[&str] = &["libintl.so.8.0", "/usr/local/lib/libintl.so.8.0", "libintl.so"];

impl Platform {
	/// Shared libraries that plausibly export the gettext ABI on this
	/// platform.
	pub fn library_candidates(&self) -> &'static [&'static str] {
		match self {
			Platform::Linux => LINUX,
			Platform::MacOs => MACOS,
			Platform::Windows => WINDOWS,
			Platform::FreeBsd | Platform::DragonFly => FREEBSD,
			Platform::NetBsd => NETBSD,
			Platform::OpenBsd => OPENBSD,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_every_platform_has_candidates() {
		for platform in Platform::ALL {
			assert!(
				!platform.library_candidates().is_empty(),
				"{platform} has no candidates"
			);
		}
	}

	#[test]
	fn test_linux_prefers_libc() {
		assert_eq!(Platform::Linux.library_candidates()[0], "libc.so.6");
		assert!(Platform::Linux.library_candidates().contains(&"libintl.so.8"));
	}

	#[test]
	fn test_windows_candidates_are_dlls() {
		assert!(Platform::Windows
			.library_candidates()
			.iter()
			.all(|name| name.ends_with(".dll")));
	}

	#[test]
	fn test_candidates_are_deterministic() {
		for platform in Platform::ALL {
			assert_eq!(platform.library_candidates(), platform.library_candidates());
		}
	}
}
