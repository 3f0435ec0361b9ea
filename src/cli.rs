// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::process::ExitCode;
use tracing::debug;

use crate::{
    infra::{fs, logging, t},
    reporting::{print_banner, print_error, print_outcome},
    runner::{config::TestInvocation, invocation::run_invocation, models::RunOutcome},
};

/// The command takes no options of its own. Whatever is passed on the
/// command line, `--help` included, lands in a hidden catch-all and the
/// suite runs regardless, so the exit code always reflects the tests.
fn build_cli() -> Command {
    Command::new("run-portfolio2-tests")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about").to_string())
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("ignored")
                .value_name("IGNORED")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .hide(true)
                .action(ArgAction::Append),
        )
}

/// Parses a command line (program name first) and returns the arguments that
/// will be ignored. Never fails: a parse error yields an empty list.
pub fn ignored_args<I, T>(argv: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match build_cli().try_get_matches_from(argv) {
        Ok(matches) => matches
            .get_many::<String>("ignored")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        Err(e) => {
            debug!(error = %e, "command line not parsed");
            Vec::new()
        }
    }
}

/// Entry point of the binary: parses (and ignores) the command line, runs the
/// Portfolio 2 suite and maps the result to the process exit code.
///
/// Exactly one terminal status line is printed. Exit code 0 means the tests
/// passed; every failure, whether from the tests or from launching them, is 1.
pub async fn run() -> ExitCode {
    logging::init();
    let locale = crate::init();
    debug!(%locale, "locale selected");

    let ignored = ignored_args(std::env::args_os());
    if !ignored.is_empty() {
        debug!(?ignored, "ignoring command-line arguments");
    }

    let invocation = TestInvocation::portfolio2();
    match execute(&invocation).await {
        Ok(outcome) => {
            print_outcome(&outcome);
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Resolves the program directory, moves the process into it for the rest of
/// its lifetime and runs `invocation` there.
pub async fn execute(invocation: &TestInvocation) -> Result<RunOutcome> {
    let project_dir = fs::program_dir()?;
    fs::enter_dir(&project_dir)?;
    debug!(dir = %project_dir.display(), "working directory set");

    print_banner(invocation);

    let outcome = run_invocation(invocation, &project_dir).await?;
    Ok(outcome)
}
