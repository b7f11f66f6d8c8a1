//! TipTime-rs: tip calculator.

use tiptime_cli::{CLIResultPresenter, ResultPresenter};
use tiptime_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        let presenter = CLIResultPresenter::new(config.quiet, config.details, config.json);
        presenter.present_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
