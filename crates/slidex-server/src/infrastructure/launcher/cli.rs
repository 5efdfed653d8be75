//! Command-line flag handling.
//!
//! Slidex takes no options.  Only the first argument is looked at:
//!
//! | First argument            | Effect                                    |
//! |---------------------------|-------------------------------------------|
//! | none, or empty            | start the port prompt                     |
//! | `-v`, `-V`, `--version`   | print `Slidex v <version>`, exit 0        |
//! | anything else             | print a refusal, exit 0                   |
//!
//! An unknown argument is not a shell error, so it exits 0 like the version
//! flag.  clap's built-in help and version flags are disabled so neither can
//! take over that contract with its own exit code.

use std::ffi::OsString;

use clap::{ArgAction, Parser};

/// Printed for any argument other than the version flag.
pub const UNRECOGNIZED_MESSAGE: &str = "(✖_✖) Nothing I can do about that.";

/// Serve a phone-controlled presentation clicker on the local network.
#[derive(Debug, Parser)]
#[command(
    name = "slidex",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print the version and exit.
    #[arg(short = 'v', long = "version", short_alias = 'V', action = ArgAction::SetTrue)]
    version: bool,
}

/// What the binary should do, decided from its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliAction {
    Serve,
    PrintVersion,
    Unrecognized,
}

/// Decides the startup action from the full argument list (program name first).
///
/// Arguments after the first one are ignored.  An empty first argument counts
/// as no argument.  `--` is handled before clap sees it, since clap would take
/// it as the end of options and report no flags at all.
pub fn parse_args<I, T>(args: I) -> CliAction
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let program = args.next().unwrap_or_else(|| OsString::from("slidex"));

    match args.next() {
        None => CliAction::Serve,
        Some(first) if first.is_empty() => CliAction::Serve,
        Some(first) if first.as_os_str() == "--" => CliAction::Unrecognized,
        Some(first) => match Cli::try_parse_from([program, first]) {
            Ok(cli) if cli.version => CliAction::PrintVersion,
            _ => CliAction::Unrecognized,
        },
    }
}

/// The line printed for the version flag.
pub fn version_banner() -> String {
    format!("Slidex v {}", env!("CARGO_PKG_VERSION"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
