// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Opening the first loadable candidate library.

use std::fmt::Display;

use libloading::Library;

use crate::error::{GettextError, Result};

/// A shared library handle together with the candidate that produced it.
#[derive(Debug)]
pub struct LoadedLibrary {
	pub library: Library,
	pub name: String,
}

/// Open each candidate in order and return the first that loads.
pub fn open_first(candidates: &[String]) -> Result<LoadedLibrary> {
	let (library, name) = open_first_with(candidates, |name| {
		// SAFETY: the gettext providers are system C libraries whose
		// initialisers have no preconditions beyond being loaded once.
		unsafe { Library::new(name) }
	})?;
	Ok(LoadedLibrary { library, name })
}

pub(crate) fn open_first_with<L, E, F>(candidates: &[String], mut open: F) -> Result<(L, String)>
where
	E: Display,
	F: FnMut(&str) -> std::result::Result<L, E>,
{
	let mut failures = Vec::with_capacity(candidates.len());

	for name in candidates {
		match open(name) {
			Ok(library) => {
				tracing::debug!(library = %name, "opened gettext library");
				return Ok((library, name.clone()));
			}
			Err(e) => {
				tracing::debug!(library = %name, error = %e, "could not open gettext library candidate");
				failures.push(format!("{name}: {e}"));
			}
		}
	}

	let reason = if failures.is_empty() {
		"no candidates".to_string()
	} else {
		failures.join("; ")
	};

	Err(GettextError::LibraryUnavailable {
		attempted: candidates.to_vec(),
		reason,
	})
}
