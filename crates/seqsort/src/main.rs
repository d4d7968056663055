//! SeqSort: recurrence sequences and keyed bubble sort from the command line.

use std::process::ExitCode;

use seqsort_cli::{CLIResultPresenter, ResultPresenter};
use seqsort_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            CLIResultPresenter::new(config.verbose, config.quiet, config.json)
                .present_error(&format!("{err:#}"));
            ExitCode::from(errors::exit_code(&err))
        }
    }
}
