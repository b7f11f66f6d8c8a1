//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::Result;

use tiptime_cli::output::{write_to_file, TipReport};
use tiptime_cli::presenter::{CLIResultPresenter, ResultPresenter};
use tiptime_core::{locale, RoundingMode, TipCalculator, TipError, TipInputs};
use tiptime_tui::FormApp;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        tiptime_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.list_locales {
        for tag in locale::available() {
            println!("{tag}");
        }
        return Ok(());
    }

    let calculator = build_calculator(config)?;

    // Handle TUI mode
    if config.tui {
        return run_tui(config, calculator);
    }

    // CLI mode
    run_cli(config, &calculator)
}

/// Build the calculator from the configured locale and rounding mode.
pub fn build_calculator(config: &AppConfig) -> Result<TipCalculator, TipError> {
    let format = match &config.locale {
        Some(tag) => locale::lookup(tag)?,
        None => locale::detect(),
    };
    let rounding: RoundingMode = config.rounding.parse()?;
    tracing::info!(locale = format.locale, currency = format.code, %rounding, "calculator configured");
    Ok(TipCalculator::new(Arc::new(format)).with_rounding(rounding))
}

fn run_cli(config: &AppConfig, calculator: &TipCalculator) -> Result<()> {
    let inputs = TipInputs::from_text(&config.bill, &config.tip, config.round_up);
    let tip = calculator.calculate(&inputs);
    let report = TipReport::new(&tip, calculator);

    let presenter = CLIResultPresenter::new(config.quiet, config.details, config.json);
    presenter.present_result(&report)?;

    // Write to file if requested
    if let Some(ref path) = config.output {
        write_to_file(path, &report.formatted)?;
    }

    Ok(())
}

fn run_tui(config: &AppConfig, calculator: TipCalculator) -> Result<()> {
    let mut app = FormApp::new(calculator).with_inputs(&config.bill, &config.tip, config.round_up);

    // Run TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    if !config.quiet {
        println!("Tip amount: {}", app.tip_display());
    }
    Ok(())
}
