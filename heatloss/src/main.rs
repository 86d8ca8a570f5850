//! Heatloss — command-line driver.

use std::process::ExitCode;

use clap::Parser;
use heatloss_lib::{Config, Error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::parse();
    if let Err(e) = init_logging(&config) {
        eprintln!("heatloss: cannot install logger: {e}");
    }
    match solve(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("heatloss: {e}");
            ExitCode::FAILURE
        }
    }
}

fn solve(config: &Config) -> Result<bool, Error> {
    let text = config.input.read()?;
    let mut out = std::io::stdout().lock();
    heatloss_lib::run(config, &text, &mut out)
}

// `log` records from the library crates reach the subscriber through its
// `tracing-log` bridge.
fn init_logging(config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(config.log_directives())?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
}
