//! uscis-notifier - upload USCIS case status notifier secrets to SSM.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use uscis_notifier::cli::output;
use uscis_notifier::cli::{execute, Cli};
use uscis_notifier::core::constants;
use uscis_notifier::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("uscis_notifier=debug")
        } else {
            EnvFilter::new("uscis_notifier=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.config) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotFound(_)) => {
                Some("pass an existing file with --config, or omit it to use the packaged notifier.toml")
            }
            Error::Config(ConfigError::Parse(_) | ConfigError::MissingField { .. }) => {
                Some("notifier.toml needs [project] name and [aws] profile/region")
            }
            Error::Prompt(_) => Some("pipe five lines on stdin or run in a terminal"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
