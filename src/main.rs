use clap::Parser;
use clap::error::ErrorKind;
use seqsort::{Demo, DemoError};
use std::ffi::OsString;
use std::io;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::Cli;

/// What to do after reading the command line.
#[derive(Debug)]
enum Startup {
    /// Run the demo. Carries the parse error if the flags fell back to defaults.
    Run(Cli, Option<clap::Error>),
    /// `--help` or `--version` was asked for; print it and stop.
    Exit(clap::Error),
}

// Bad flags never stop the demo or change the exit status.
fn parse_args<I, T>(args: I) -> Startup
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Startup::Run(cli, None),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Startup::Exit(e)
        }
        Err(e) => Startup::Run(Cli::default(), Some(e)),
    }
}

fn main() {
    let (cli, parse_error) = match parse_args(std::env::args_os()) {
        Startup::Run(cli, parse_error) => (cli, parse_error),
        Startup::Exit(info) => {
            if let Err(e) = info.print() {
                eprintln!("{e}");
            }
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    if let Some(e) = parse_error {
        warn!(error = %e, "ignoring command line, using defaults");
    }

    // Console failures are reported but never change the exit status.
    if let Err(e) = run(&cli) {
        error!(error = %e, "demo stopped early");
    }
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let mut demo = Demo::new(io::stdout().lock());
    demo.run()?;
    if !cli.no_wait {
        demo.wait_for_keystroke(&mut io::stdin().lock())?;
    }
    Ok(())
}
