// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `loom-gettext`: inspect and exercise the native gettext binding.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use loom_common_gettext::{bind_i18n, ensure_bound, init_i18n, l, ld, LibraryConfig, Platform};

/// Inspect and exercise the native gettext library.
#[derive(Parser, Debug)]
#[command(name = "loom-gettext", version)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show the platform, LC_ALL value and which gettext library loads
	Probe,
	/// Translate message ids
	Lookup(LookupArgs),
}

#[derive(Args, Debug)]
struct LookupArgs {
	/// Text domain to translate in
	#[arg(long, short = 'd')]
	domain: Option<String>,

	/// Directory holding the domain's catalogs (<dir>/<lang>/LC_MESSAGES/<domain>.mo)
	#[arg(long, requires = "domain")]
	dir: Option<PathBuf>,

	/// Bind the domain without making it the current domain
	#[arg(long, requires = "dir")]
	auxiliary: bool,

	/// Message ids to translate
	#[arg(required = true)]
	msgids: Vec<String>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	match cli.command {
		Command::Probe => probe(),
		Command::Lookup(args) => lookup(args),
	}
}

fn probe() -> Result<()> {
	let platform = Platform::current().context("identifying platform")?;
	let candidates = LibraryConfig::from_env().candidates(platform);

	println!("platform:   {platform}");
	println!("LC_ALL:     {}", platform.lc_all());
	println!("candidates: {}", candidates.join(", "));

	let native = ensure_bound().context("binding native gettext")?;
	println!("loaded:     {}", native.library_name());
	Ok(())
}

fn lookup(args: LookupArgs) -> Result<()> {
	if let (Some(domain), Some(dir)) = (&args.domain, &args.dir) {
		let setup = if args.auxiliary {
			bind_i18n(domain, dir)
		} else {
			init_i18n(domain, dir)
		};
		setup.with_context(|| format!("setting up text domain '{domain}'"))?;
	} else {
		ensure_bound().context("binding native gettext")?;
	}

	tracing::debug!(domain = ?args.domain, count = args.msgids.len(), "translating message ids");
	for msgid in &args.msgids {
		let translated = match (&args.domain, args.auxiliary || args.dir.is_none()) {
			(Some(domain), true) => ld(domain, msgid),
			_ => l(msgid),
		};
		println!("{translated}");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn test_cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn test_parse_probe() {
		let cli = Cli::try_parse_from(["loom-gettext", "probe"]).unwrap();
		assert!(matches!(cli.command, Command::Probe));
	}

	#[test]
	fn test_parse_lookup_with_domain() {
		let cli = Cli::try_parse_from([
			"loom-gettext",
			"lookup",
			"--domain",
			"loom",
			"--dir",
			"/usr/share/locale",
			"Hello",
			"Goodbye",
		])
		.unwrap();

		let Command::Lookup(args) = cli.command else {
			panic!("expected lookup");
		};
		assert_eq!(args.domain.as_deref(), Some("loom"));
		assert_eq!(args.dir, Some(PathBuf::from("/usr/share/locale")));
		assert!(!args.auxiliary);
		assert_eq!(args.msgids, vec!["Hello", "Goodbye"]);
	}

	#[test]
	fn test_dir_requires_domain() {
		assert!(Cli::try_parse_from(["loom-gettext", "lookup", "--dir", "/tmp", "Hello"]).is_err());
	}

	#[test]
	fn test_auxiliary_requires_dir() {
		assert!(
			Cli::try_parse_from(["loom-gettext", "lookup", "-d", "loom", "--auxiliary", "Hello"])
				.is_err()
		);
	}

	#[test]
	fn test_lookup_requires_msgid() {
		assert!(Cli::try_parse_from(["loom-gettext", "lookup"]).is_err());
	}
}
