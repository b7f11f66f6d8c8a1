//! CLI result presenter.

use crate::output::{format_percent, OutputError, TipReport};
use crate::ui;

/// Shows a computed tip to the user.
pub trait ResultPresenter {
    /// Present one computed tip.
    fn present_result(&self, report: &TipReport) -> Result<(), OutputError>;

    /// Present an error message.
    fn present_error(&self, error: &str);
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    quiet: bool,
    details: bool,
    json: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool, details: bool, json: bool) -> Self {
        Self {
            quiet,
            details,
            json,
        }
    }

    /// Render the report as the lines `present_result` prints.
    pub fn render(&self, report: &TipReport) -> Result<String, OutputError> {
        if self.json {
            return report.to_json();
        }
        if self.quiet {
            return Ok(report.formatted.clone());
        }

        let result_line = ui::highlight(&format!("Tip amount: {}", report.formatted));
        if !self.details {
            return Ok(result_line);
        }

        let rounding = if report.rounded {
            format!("{} (applied)", report.rounding)
        } else {
            "off".to_string()
        };
        let lines = [
            ui::header("Calculate tip"),
            format!("Bill Amount: {}", report.formatted_bill),
            format!("Tip percent: {}", format_percent(report.tip_percent)),
            format!("Round up:    {rounding}"),
            format!("Locale:      {} ({})", report.locale, report.currency),
            result_line,
            format!("Total: {}", report.formatted_total),
        ];
        Ok(lines.join("\n"))
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, report: &TipReport) -> Result<(), OutputError> {
        println!("{}", self.render(report)?);
        Ok(())
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
