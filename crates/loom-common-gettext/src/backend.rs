// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::ffi::CStr;
use std::os::raw::c_int;

/// The six gettext-family calls, in safe Rust types.
///
/// Setup calls return `None` when the native function returns `NULL`.
/// Lookups always return a string; with no translation available that is
/// the message id itself.
pub trait GettextBackend {
	fn set_locale(&self, category: c_int, locale: &CStr) -> Option<String>;

	fn bind_text_domain(&self, domain: &CStr, directory: &CStr) -> Option<String>;

	fn bind_text_domain_codeset(&self, domain: &CStr, codeset: &CStr) -> Option<String>;

	fn text_domain(&self, domain: &CStr) -> Option<String>;

	fn gettext(&self, msgid: &CStr) -> String;

	fn dgettext(&self, domain: &CStr, msgid: &CStr) -> String;
}

impl<T: GettextBackend + ?Sized> GettextBackend for &T {
	fn set_locale(&self, category: c_int, locale: &CStr) -> Option<String> {
		(**self).set_locale(category, locale)
	}

	fn bind_text_domain(&self, domain: &CStr, directory: &CStr) -> Option<String> {
		(**self).bind_text_domain(domain, directory)
	}

	fn bind_text_domain_codeset(&self, domain: &CStr, codeset: &CStr) -> Option<String> {
		(**self).bind_text_domain_codeset(domain, codeset)
	}

	fn text_domain(&self, domain: &CStr) -> Option<String> {
		(**self).text_domain(domain)
	}

	fn gettext(&self, msgid: &CStr) -> String {
		(**self).gettext(msgid)
	}

	fn dgettext(&self, domain: &CStr, msgid: &CStr) -> String {
		(**self).dgettext(domain, msgid)
	}
}
