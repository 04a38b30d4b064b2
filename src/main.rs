use std::io::{self, Write};

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use stepsqrt::prelude::*;

/// Compute a square root and show how it was reached
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number to take the square root of
    #[arg(allow_negative_numbers = true, value_parser = parse_value)]
    value: f64,

    /// Evaluation strategy: transcendental or newton-raphson
    /// (defaults to the one selected at build time)
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Do not print per-step diagnostics
    #[arg(long = "no-diagnostics")]
    no_diagnostics: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn parse_value(s: &str) -> Result<f64> {
    s.trim()
        .parse()
        .map_err(|e| Error::invalid_argument("value", format!("{}: {:?}", e, s)))
}

fn init_logger(level: log::LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(None, log::LevelFilter::Off)
        .filter_module("stepsqrt", level)
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let x = cli.value;
    let strategy = cli.strategy.unwrap_or_else(Strategy::detect);
    let options = SqrtOptions::new().with_strategy(strategy);
    log::info!("computing sqrt of {} with {}", x, strategy);

    let result = if cli.no_diagnostics {
        sqrt_with(x, &options, &mut NoopObserver)
    } else {
        let mut observer = WriterObserver::stdout();
        let result = sqrt_with(x, &options, &mut observer);
        match observer.error() {
            // reader went away, nothing left to print to
            Some(io::ErrorKind::BrokenPipe) => return Ok(()),
            Some(kind) => log::warn!("diagnostic output failed: {:?}", kind),
            None => {}
        }
        result
    };

    match writeln!(io::stdout().lock(), "The square root of {} is {}", x, result) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(Error::Output { kind: e.kind() }),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose.log_level_filter());
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
