use std::process::ExitCode;

use cli::Cli;
use config::Config;
use error::Error;
use tracing_subscriber::EnvFilter;

mod classify;
mod cli;
mod config;
mod convert;
mod discover;
mod error;
mod utils;

#[tokio::main]
async fn main() -> ExitCode {
    // Bad arguments exit 1 like every other usage error; --help and --version exit 0.
    let cli: Cli = match clap::Parser::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage) => {
            eprintln!("❌ {}", Error::Usage);
            eprintln!("{}", cli::USAGE);
            eprintln!("{}", cli::USAGE_EXAMPLE);
            ExitCode::FAILURE
        }
        Err(e @ (Error::NotFound(_) | Error::NotADirectory(_) | Error::Failures(_))) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = Config::load(&cli).await?;
    let strict = config.strict;
    let report = convert::run_convert(config).await?;

    if strict && !report.failed.is_empty() {
        return Err(Error::Failures(report.failed.len()));
    }
    Ok(())
}

/// Diagnostics go to stderr so stdout only carries the conversion report.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "js2ts=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
