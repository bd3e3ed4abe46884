// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide entry points over the native library.

use std::path::Path;

use crate::binder::{bound, ensure_bound};
use crate::domain::TextDomains;
use crate::error::Result;
use crate::symbols::NativeGettext;

fn native_domains(native: &'static NativeGettext) -> TextDomains<&'static NativeGettext> {
	TextDomains::new(native, native.platform())
}

/// Initialize gettext for the application and make `domain` current.
///
/// Use this once at startup. Libraries that need their own domain should
/// call [`bind_i18n`] instead so the application's domain is left alone.
pub fn init_i18n(domain: &str, dir: impl AsRef<Path>) -> Result<()> {
	native_domains(ensure_bound()?).initialize_global(domain, dir)
}

/// Bind `domain` to `dir` without changing the current domain.
///
/// Look strings up with [`local_domain`] (or [`ld`](crate::ld)).
pub fn bind_i18n(domain: &str, dir: impl AsRef<Path>) -> Result<()> {
	native_domains(ensure_bound()?).bind_auxiliary(domain, dir)
}

/// Translate `msgid` in the current text domain.
///
/// Before a successful [`init_i18n`] or [`bind_i18n`] the message id is
/// returned unchanged.
pub fn local(msgid: &str) -> String {
	match bound() {
		Some(native) => native_domains(native).lookup(msgid),
		None => msgid.to_string(),
	}
}

/// Translate `msgid` in `domain`.
pub fn local_domain(domain: &str, msgid: &str) -> String {
	match bound() {
		Some(native) => native_domains(native).lookup_in_domain(domain, msgid),
		None => msgid.to_string(),
	}
}
