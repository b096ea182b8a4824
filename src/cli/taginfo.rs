use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use crate::backend::CommandBackend;
use crate::config::Config;
use crate::decision::{self, GrantReason, Outcome};
use crate::lastlog;
use crate::protocol::{Invocation, OpCode, TypeCode};

/// Minimum token count of a taginfo invocation: program name, config path,
/// username, tag name, type code, operation code, directory, plus the
/// file-group tail.
const MIN_ARGC: usize = 10;

/// CVS taginfo hook arguments, positional in the order CVS passes them.
#[derive(Debug, Parser)]
#[command(name = "cvs-taginfo-hook", version, about)]
pub(crate) struct Cli {
    /// Path to the KDL config file
    config: PathBuf,
    /// CVS username performing the operation
    username: String,
    /// Name of the tag or branch being operated on
    tag: String,
    /// Type code: "N" for a tag, "T" for a branch
    type_code: String,
    /// Operation code: "add", "mov" or "del"
    op_code: String,
    /// Repository directory the operation applies to
    directory: String,
    /// Per-file groups: <filename> <source_branch> <old_rev> <new_rev>
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    file_args: Vec<String>,
}

impl Cli {
    fn into_invocation(self) -> Invocation {
        Invocation {
            config_path: self.config,
            username: self.username,
            tag: self.tag,
            type_code: TypeCode::parse(&self.type_code),
            op_code: OpCode::parse(&self.op_code),
            directory: self.directory,
            file_args: self.file_args,
        }
    }
}

/// Execute the taginfo hook: parse argv, load config, decide, render.
///
/// Every terminal state maps to one stable exit code (see
/// [`Outcome::exit_code`]); denial and error messages go to stderr, which
/// CVS relays to the user running `cvs tag`.
pub(crate) fn run(args: &[String]) -> ExitCode {
    log::debug!("taginfo invocation: {args:?}");

    if args.len() < MIN_ARGC {
        let program = args
            .first()
            .map(String::as_str)
            .unwrap_or(env!("CARGO_PKG_NAME"));
        print_usage(program);
        return render(&Outcome::Usage);
    }

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => render(&Outcome::Usage),
            };
        }
    };
    let invocation = cli.into_invocation();

    let config = match Config::load(&invocation.config_path) {
        Ok(config) => config,
        Err(e) => return render(&Outcome::ConfigFailed(e)),
    };

    let backend = CommandBackend::new(&config.backend);
    let outcome = decision::decide(&invocation, &config, &backend);
    log::debug!("outcome: {outcome:?}");

    if matches!(outcome, Outcome::Granted(GrantReason::BackendApproved)) && config.logs_combine {
        // Remember the directory so the log mailer can combine tag entries
        // from a multi-directory operation into one notification.
        if let Err(e) = lastlog::record(&config.temp_dir, &invocation.directory) {
            log::warn!("failed to record lastlog directory: {e}");
        }
    }

    render(&outcome)
}

/// Usage line in CVS taginfo format-string vocabulary, matching what an
/// administrator writes in CVSROOT/taginfo.
fn print_usage(program: &str) {
    eprintln!("Usage: {program} <config file> $USER %t %b %o %p %{{sTv}}");
    eprintln!();
}

fn render(outcome: &Outcome) -> ExitCode {
    if let Some(message) = outcome.stderr_message() {
        eprintln!("{message}");
    }
    ExitCode::from(outcome.exit_code())
}
