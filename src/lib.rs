pub mod backend;
pub mod config;
pub mod decision;
pub mod domain;
pub mod protocol;

pub(crate) mod cli;
pub(crate) mod lastlog;

/// Run the taginfo hook against the raw process argument vector and return
/// the exit code CVS will act on (nonzero vetoes the tag operation).
///
/// This is the binary entry point. It exists to bridge the binary crate
/// (`main.rs`) to the library without exposing `cli` internals. Not a stable
/// integration API — callers should use [`decision::decide`],
/// [`config::Config`] and [`backend::AccessBackend`] directly.
pub fn run(args: &[String]) -> std::process::ExitCode {
    cli::taginfo::run(args)
}
