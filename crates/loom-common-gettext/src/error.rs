// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for gettext binding and domain setup.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for gettext operations.
pub type Result<T> = std::result::Result<T, GettextError>;

/// Errors that can occur while binding the native library or configuring a
/// text domain.
///
/// Cloneable so that a failed bind can be cached and handed to every caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GettextError {
	/// The running operating system has no known `LC_ALL` mapping.
	#[error("unsupported platform: {os}")]
	UnsupportedPlatform { os: String },

	/// None of the candidate libraries could be opened.
	#[error("no gettext library could be loaded (tried: {}): {reason}", .attempted.join(", "))]
	LibraryUnavailable {
		attempted: Vec<String>,
		reason: String,
	},

	/// The library was opened but a required function is missing.
	#[error("symbol '{symbol}' not found in {library}")]
	SymbolResolutionFailed { symbol: String, library: String },

	/// `bindtextdomain` rejected the domain or directory.
	#[error("failed to bind text domain '{domain}' to {}: {reason}", .directory.display())]
	BindFailed {
		domain: String,
		directory: PathBuf,
		reason: String,
	},

	/// `bind_textdomain_codeset` rejected the codeset.
	#[error("failed to set codeset {codeset} for text domain '{domain}'")]
	CodesetFailed { domain: String, codeset: String },

	/// `textdomain` refused to make the domain current.
	#[error("failed to activate text domain '{domain}'")]
	ActivateFailed { domain: String },

	/// The value cannot be passed to C (it contains a NUL byte).
	#[error("invalid {argument}: {value:?} contains a NUL byte")]
	InvalidArgument { argument: &'static str, value: String },
}

impl GettextError {
	pub(crate) fn bind_failed(
		domain: impl Into<String>,
		directory: impl Into<PathBuf>,
		reason: impl Into<String>,
	) -> Self {
		Self::BindFailed {
			domain: domain.into(),
			directory: directory.into(),
			reason: reason.into(),
		}
	}

	/// Whether the error came from the one-time library bind rather than
	/// from configuring a particular domain.
	pub fn is_bind_error(&self) -> bool {
		matches!(
			self,
			Self::UnsupportedPlatform { .. }
				| Self::LibraryUnavailable { .. }
				| Self::SymbolResolutionFailed { .. }
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_library_unavailable_lists_candidates() {
		let err = GettextError::LibraryUnavailable {
			attempted: vec!["libc.so.6".to_string(), "libintl.so.8".to_string()],
			reason: "file not found".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"no gettext library could be loaded (tried: libc.so.6, libintl.so.8): file not found"
		);
	}

	#[test]
	fn test_bind_failed_names_domain_and_directory() {
		let err = GettextError::bind_failed("myapp", "/missing", "catalog directory does not exist");
		let message = err.to_string();
		assert!(message.contains("'myapp'"));
		assert!(message.contains("/missing"));
	}

	#[test]
	fn test_domain_steps_are_distinguishable() {
		let bind = GettextError::bind_failed("d", "/x", "rejected");
		let codeset = GettextError::CodesetFailed {
			domain: "d".to_string(),
			codeset: "UTF-8".to_string(),
		};
		let activate = GettextError::ActivateFailed {
			domain: "d".to_string(),
		};
		assert_ne!(bind, codeset);
		assert_ne!(codeset, activate);
		assert!(!bind.is_bind_error());
		assert!(!activate.is_bind_error());
	}

	#[test]
	fn test_bind_errors_classified() {
		assert!(GettextError::UnsupportedPlatform {
			os: "plan9".to_string()
		}
		.is_bind_error());
		assert!(GettextError::SymbolResolutionFailed {
			symbol: "dgettext".to_string(),
			library: "libc.so.6".to_string(),
		}
		.is_bind_error());
	}
}
