use std::process::ExitCode;

/// CVS invokes this binary once per `cvs tag`/`cvs rtag` directory with a
/// fixed positional argument line (see CVSROOT/taginfo), so argument
/// handling starts from the raw vector rather than a subcommand tree.
fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    cvs_taginfo_hook::run(&args)
}
