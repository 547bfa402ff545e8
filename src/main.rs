use std::process::ExitCode;

use terminalstrip::cli::{self, Cli};
use terminalstrip::ui::output::{self, Verbosity};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .parse_env("TSTRIP_LOG")
        .format_timestamp(None)
        .init();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
