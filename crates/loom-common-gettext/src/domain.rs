// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Text domain setup and lookups over a [`GettextBackend`].

use std::ffi::CString;
use std::path::Path;

use tracing::{info, warn};

use crate::backend::GettextBackend;
use crate::error::{GettextError, Result};
use crate::platform::Platform;

/// Codeset every catalog is converted to.
pub const CATALOG_CODESET: &str = "UTF-8";

/// Text domain operations over a bound gettext backend.
#[derive(Debug, Clone)]
pub struct TextDomains<B> {
	backend: B,
	platform: Platform,
}

impl<B: GettextBackend> TextDomains<B> {
	pub fn new(backend: B, platform: Platform) -> Self {
		Self { backend, platform }
	}

	pub fn backend(&self) -> &B {
		&self.backend
	}

	/// Make `domain` the process-wide text domain, with catalogs under
	/// `directory`. Equivalent to:
	///
	/// ```c
	/// setlocale(LC_ALL, "");
	/// bindtextdomain(domain, directory);
	/// bind_textdomain_codeset(domain, "UTF-8");
	/// textdomain(domain);
	/// ```
	///
	/// A failed `setlocale` is logged and ignored.
	pub fn initialize_global(&self, domain: &str, directory: impl AsRef<Path>) -> Result<()> {
		let domain_c = self.register(domain, directory.as_ref())?;

		if !succeeded(self.backend.text_domain(&domain_c)) {
			return Err(GettextError::ActivateFailed {
				domain: domain.to_string(),
			});
		}

		info!(domain = %domain, directory = %directory.as_ref().display(), "activated text domain");
		Ok(())
	}

	/// Bind `domain` to `directory` without making it the current domain.
	///
	/// For libraries that translate through [`TextDomains::lookup_in_domain`]
	/// and must leave the application's domain alone.
	pub fn bind_auxiliary(&self, domain: &str, directory: impl AsRef<Path>) -> Result<()> {
		self.register(domain, directory.as_ref())?;

		info!(domain = %domain, directory = %directory.as_ref().display(), "bound auxiliary text domain");
		Ok(())
	}

	/// Translate `msgid` in the current domain.
	pub fn lookup(&self, msgid: &str) -> String {
		match CString::new(msgid) {
			Ok(msgid_c) => self.backend.gettext(&msgid_c),
			Err(_) => msgid.to_string(),
		}
	}

	/// Translate `msgid` in `domain`, regardless of the current domain.
	pub fn lookup_in_domain(&self, domain: &str, msgid: &str) -> String {
		match (CString::new(domain), CString::new(msgid)) {
			(Ok(domain_c), Ok(msgid_c)) => self.backend.dgettext(&domain_c, &msgid_c),
			_ => msgid.to_string(),
		}
	}

	/// Locale, directory binding and codeset: the steps shared by both
	/// setup paths, in the order the native library requires.
	fn register(&self, domain: &str, directory: &Path) -> Result<CString> {
		let domain_c = to_cstring("domain", domain)?;
		let directory_c = path_to_cstring(directory)?;

		self.apply_environment_locale();

		if !directory.is_dir() {
			return Err(GettextError::bind_failed(
				domain,
				directory,
				"catalog directory does not exist",
			));
		}

		if !succeeded(self.backend.bind_text_domain(&domain_c, &directory_c)) {
			return Err(GettextError::bind_failed(
				domain,
				directory,
				"rejected by bindtextdomain",
			));
		}

		let codeset = to_cstring("codeset", CATALOG_CODESET)?;
		if !succeeded(self.backend.bind_text_domain_codeset(&domain_c, &codeset)) {
			return Err(GettextError::CodesetFailed {
				domain: domain.to_string(),
				codeset: CATALOG_CODESET.to_string(),
			});
		}

		Ok(domain_c)
	}

	fn apply_environment_locale(&self) {
		let lc_all = self.platform.lc_all();
		if !succeeded(self.backend.set_locale(lc_all, c"")) {
			warn!(
				lc_all,
				platform = %self.platform,
				"failed to set locale, verify that the system locale is installed; continuing"
			);
		}
	}
}

fn succeeded(result: Option<String>) -> bool {
	result.is_some_and(|value| !value.is_empty())
}

fn to_cstring(argument: &'static str, value: &str) -> Result<CString> {
	CString::new(value).map_err(|_| GettextError::InvalidArgument {
		argument,
		value: value.to_string(),
	})
}

#[cfg(unix)]
fn path_to_cstring(path: &Path) -> Result<CString> {
	use std::os::unix::ffi::OsStrExt;

	CString::new(path.as_os_str().as_bytes()).map_err(|_| GettextError::InvalidArgument {
		argument: "directory",
		value: path.display().to_string(),
	})
}

#[cfg(not(unix))]
fn path_to_cstring(path: &Path) -> Result<CString> {
	to_cstring("directory", &path.to_string_lossy())
}
