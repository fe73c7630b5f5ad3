//! Command line flags for the demo binary.

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "seqsort",
    about = "Sort a bounded integer array and a character vector, showing each before and after",
    version
)]
pub struct Cli {
    /// Exit without waiting for a keystroke
    #[arg(long)]
    pub no_wait: bool,

    /// Log more (repeat for debug and trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
