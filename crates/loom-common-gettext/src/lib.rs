// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Native gettext for Loom.
//!
//! This crate loads the operating system's gettext provider at runtime (libc
//! on glibc and musl Linux, libintl elsewhere), binds `setlocale`,
//! `bindtextdomain`, `bind_textdomain_codeset`, `textdomain`, `gettext` and
//! `dgettext`, and exposes them as a handful of safe functions. Catalogs are
//! read by the native library; nothing here parses `.mo` files.
//!
//! The library is loaded at most once per process. A failed load is
//! remembered and returned to every later caller.
//!
//! # Environment
//!
//! - `LOOM_GETTEXT_LIBRARY`: extra library paths tried before the built-in
//!   candidates for the platform.
//!
//! # Example
//!
//! ```no_run
//! use loom_common_gettext::{init_i18n, bind_i18n, l, ld};
//!
//! // Application startup
//! init_i18n("loom", "/usr/share/locale")?;
//! println!("{}", l("Hello"));
//!
//! // A library with its own catalog
//! bind_i18n("loom-widgets", "/usr/share/locale")?;
//! println!("{}", ld("loom-widgets", "Cancel"));
//! # Ok::<(), loom_common_gettext::GettextError>(())
//! ```

mod backend;
mod binder;
mod config;
mod domain;
mod error;
mod facade;
mod loader;
mod locate;
mod platform;
mod symbols;

pub use backend::GettextBackend;
pub use binder::{bound, ensure_bound, BindOnce};
pub use config::{LibraryConfig, LIBRARY_ENV};
pub use domain::{TextDomains, CATALOG_CODESET};
pub use error::{GettextError, Result};
pub use facade::{bind_i18n, init_i18n, local, local_domain};
pub use loader::{open_first, LoadedLibrary};
pub use platform::{lc_all_for, Platform, LC_ALL_BSD, LC_ALL_LINUX};
pub use symbols::{NativeGettext, REQUIRED_SYMBOLS};

/// Shorthand for [`local`].
pub use facade::local as l;

/// Shorthand for [`local_domain`].
pub use facade::local_domain as ld;
