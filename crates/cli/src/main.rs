use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::{debug, LevelFilter};
use stfmt_core::error::Result;
use stfmt_core::format;

use stfmt_cli::cli_args::Args;

/// Configure the `env_logger` backend.
///
/// `--verbose` raises the default filter to debug; `RUST_LOG`, when set,
/// still overrides the flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

fn execute(args: &Args) -> Result<()> {
    debug!("Pattern input: `{}`", args.pattern);
    debug!("Length input: {:?}", args.lengths);
    debug!("Formatting {} line(s)", args.lengths.len());

    for line in format::format_all(&args.pattern, &args.lengths) {
        println!("{line}");
    }

    Ok(())
}

/// Report an argument error as usage plus the specific message on stderr,
/// exiting with status 2. `--help` still renders on stdout with a zero
/// exit.
fn report_args_error(err: &clap::Error) -> ExitCode {
    if !err.use_stderr() {
        let _ = err.print();
        return ExitCode::SUCCESS;
    }

    let rendered = err.render().to_string();
    // Some error kinds (e.g. a missing argument) already carry the usage
    if !rendered.contains("Usage:") {
        eprintln!("{}", Args::command().render_usage());
    }
    eprint!("{rendered}");

    ExitCode::from(2)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return report_args_error(&err),
    };
    init_logging(args.verbose);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
