// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tests against the real gettext in glibc.
//!
//! Every test binds the same process-wide library, so they also cover
//! concurrent first use of `ensure_bound`.

#![cfg(all(target_os = "linux", target_env = "gnu"))]

use std::thread;

use loom_common_gettext::{
	bind_i18n, ensure_bound, init_i18n, l, ld, local, local_domain, GettextError, Platform,
};

/// The native library is shared; binding from many threads yields one
/// handle.
#[test]
fn test_ensure_bound_is_shared_across_threads() {
	let handles: Vec<_> = (0..8)
		.map(|_| thread::spawn(|| ensure_bound().map(|native| native as *const _ as usize)))
		.collect();

	let addresses: Vec<usize> = handles
		.into_iter()
		.map(|h| h.join().unwrap().unwrap())
		.collect();

	assert!(addresses.iter().all(|a| *a == addresses[0]));
	let native = ensure_bound().unwrap();
	assert_eq!(native.platform(), Platform::Linux);
}

/// Without an installed catalog the message id is returned unchanged.
#[test]
fn test_init_then_lookup_returns_msgid() {
	let dir = tempfile::tempdir().unwrap();

	init_i18n("loom-gettext-test", dir.path()).unwrap();

	assert_eq!(local("Hello"), "Hello");
	assert_eq!(l("Hello"), "Hello");
}

#[test]
fn test_auxiliary_bind_leaves_global_lookup_alone() {
	let dir = tempfile::tempdir().unwrap();
	init_i18n("loom-gettext-test", dir.path()).unwrap();
	let before = local("Settings");

	bind_i18n("loom-gettext-aux", dir.path()).unwrap();

	assert_eq!(local("Settings"), before);
	assert_eq!(local_domain("loom-gettext-aux", "Settings"), "Settings");
}

#[test]
fn test_unbound_domain_lookup_returns_msgid() {
	ensure_bound().unwrap();
	assert_eq!(ld("loom-gettext-never-bound", "Quit"), "Quit");
}

#[test]
fn test_missing_directory_fails() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("no-such-locale-dir");

	let err = init_i18n("loom-gettext-test", &missing).unwrap_err();
	assert!(matches!(
		err,
		GettextError::BindFailed { .. }
			| GettextError::CodesetFailed { .. }
			| GettextError::ActivateFailed { .. }
	));

	let err = bind_i18n("loom-gettext-aux", &missing).unwrap_err();
	assert!(matches!(err, GettextError::BindFailed { .. }));
}

#[test]
fn test_message_ids_with_nul_pass_through() {
	ensure_bound().unwrap();
	assert_eq!(local("a\0b"), "a\0b");
	assert_eq!(local_domain("loom\0", "Quit"), "Quit");
}
