// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed bindings to the gettext functions of a loaded library.

use std::ffi::CStr;
use std::fmt;
use std::os::raw::{c_char, c_int};

use libloading::Library;

use crate::backend::GettextBackend;
use crate::error::{GettextError, Result};
use crate::loader::LoadedLibrary;
use crate::platform::Platform;

type SetLocaleFn = unsafe extern "C" fn(c_int, *const c_char) -> *mut c_char;
type UnaryFn = unsafe extern "C" fn(*const c_char) -> *mut c_char;
type BinaryFn = unsafe extern "C" fn(*const c_char, *const c_char) -> *mut c_char;

pub const SET_LOCALE: &str = "setlocale";
pub const BIND_TEXT_DOMAIN: &str = "bindtextdomain";
pub const BIND_TEXT_DOMAIN_CODESET: &str = "bind_textdomain_codeset";
pub const TEXT_DOMAIN: &str = "textdomain";
pub const GETTEXT: &str = "gettext";
pub const DGETTEXT: &str = "dgettext";

/// Symbols every gettext provider must export.
pub const REQUIRED_SYMBOLS: [&str; 6] = [
	SET_LOCALE,
	BIND_TEXT_DOMAIN,
	BIND_TEXT_DOMAIN_CODESET,
	TEXT_DOMAIN,
	GETTEXT,
	DGETTEXT,
];

/// GNU libintl exports its entry points under this prefix when it is not
/// part of libc.
const LIBINTL_PREFIX: &str = "libintl_";

/// The native gettext library with all six functions resolved.
///
/// Owns the library handle, so the function pointers stay valid for as long
/// as this value lives.
pub struct NativeGettext {
	set_locale: SetLocaleFn,
	bind_text_domain: BinaryFn,
	bind_text_domain_codeset: BinaryFn,
	text_domain: UnaryFn,
	gettext: UnaryFn,
	dgettext: BinaryFn,
	platform: Platform,
	library_name: String,
	_library: Library,
}

impl NativeGettext {
	/// Resolve every required symbol against `loaded`.
	///
	/// Either all six symbols bind or the library is dropped and the first
	/// missing symbol is reported.
	pub fn bind(loaded: LoadedLibrary, platform: Platform) -> Result<Self> {
		let LoadedLibrary { library, name } = loaded;

		// SAFETY: each type alias matches the C prototype of the symbol it
		// is resolved for.
		let native = unsafe {
			Self {
				set_locale: resolve::<SetLocaleFn>(&library, &name, SET_LOCALE)?,
				bind_text_domain: resolve::<BinaryFn>(&library, &name, BIND_TEXT_DOMAIN)?,
				bind_text_domain_codeset: resolve::<BinaryFn>(
					&library,
					&name,
					BIND_TEXT_DOMAIN_CODESET,
				)?,
				text_domain: resolve::<UnaryFn>(&library, &name, TEXT_DOMAIN)?,
				gettext: resolve::<UnaryFn>(&library, &name, GETTEXT)?,
				dgettext: resolve::<BinaryFn>(&library, &name, DGETTEXT)?,
				platform,
				library_name: name,
				_library: library,
			}
		};

		tracing::debug!(library = %native.library_name, platform = %platform, "bound gettext symbols");
		Ok(native)
	}

	/// The candidate name the library was loaded from.
	pub fn library_name(&self) -> &str {
		&self.library_name
	}

	pub fn platform(&self) -> Platform {
		self.platform
	}
}

impl fmt::Debug for NativeGettext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NativeGettext")
			.field("library_name", &self.library_name)
			.field("platform", &self.platform)
			.finish_non_exhaustive()
	}
}

/// Look up `symbol`, falling back to its `libintl_` alias.
///
/// # Safety
///
/// `T` must be the function pointer type of the C symbol.
unsafe fn resolve<T: Copy>(library: &Library, library_name: &str, symbol: &str) -> Result<T> {
	for name in [symbol.to_string(), format!("{LIBINTL_PREFIX}{symbol}")] {
		if let Ok(found) = library.get::<T>(name.as_bytes()) {
			tracing::trace!(symbol = %name, library = %library_name, "resolved symbol");
			return Ok(*found);
		}
	}

	Err(GettextError::SymbolResolutionFailed {
		symbol: symbol.to_string(),
		library: library_name.to_string(),
	})
}

/// Copy a C string returned by gettext. The result may alias one of the
/// arguments, so it must be copied before those are dropped.
fn owned(ptr: *const c_char) -> Option<String> {
	if ptr.is_null() {
		return None;
	}
	// SAFETY: non-null results from the gettext family are NUL-terminated
	// strings that outlive the call.
	Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

impl GettextBackend for NativeGettext {
	fn set_locale(&self, category: c_int, locale: &CStr) -> Option<String> {
		owned(unsafe { (self.set_locale)(category, locale.as_ptr()) })
	}

	fn bind_text_domain(&self, domain: &CStr, directory: &CStr) -> Option<String> {
		owned(unsafe { (self.bind_text_domain)(domain.as_ptr(), directory.as_ptr()) })
	}

	fn bind_text_domain_codeset(&self, domain: &CStr, codeset: &CStr) -> Option<String> {
		owned(unsafe { (self.bind_text_domain_codeset)(domain.as_ptr(), codeset.as_ptr()) })
	}

	fn text_domain(&self, domain: &CStr) -> Option<String> {
		owned(unsafe { (self.text_domain)(domain.as_ptr()) })
	}

	fn gettext(&self, msgid: &CStr) -> String {
		owned(unsafe { (self.gettext)(msgid.as_ptr()) })
			.unwrap_or_else(|| msgid.to_string_lossy().into_owned())
	}

	fn dgettext(&self, domain: &CStr, msgid: &CStr) -> String {
		owned(unsafe { (self.dgettext)(domain.as_ptr(), msgid.as_ptr()) })
			.unwrap_or_else(|| msgid.to_string_lossy().into_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_required_symbols_are_distinct() {
		let mut names = REQUIRED_SYMBOLS.to_vec();
		names.sort_unstable();
		names.dedup();
		assert_eq!(names.len(), 6);
	}

	#[test]
	fn test_owned_null_is_none() {
		assert_eq!(owned(std::ptr::null()), None);
	}

	#[test]
	fn test_owned_copies_string() {
		let value = c"UTF-8";
		assert_eq!(owned(value.as_ptr()), Some("UTF-8".to_string()));
	}

	#[cfg(all(target_os = "linux", target_env = "gnu"))]
	#[test]
	fn test_bind_against_glibc() {
		let loaded = crate::loader::open_first(&["libc.so.6".to_string()]).unwrap();
		let native = NativeGettext::bind(loaded, Platform::Linux).unwrap();
		assert_eq!(native.library_name(), "libc.so.6");
		assert_eq!(native.gettext(c"Hello"), "Hello");
	}
}
