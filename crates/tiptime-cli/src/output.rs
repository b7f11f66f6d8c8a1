//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use tiptime_core::{RoundingMode, Tip, TipCalculator};

/// Error writing CLI output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Everything the CLI can show about one computation.
#[derive(Debug, Clone, Serialize)]
pub struct TipReport {
    pub bill: f64,
    pub tip_percent: f64,
    pub raw_tip: f64,
    pub tip: f64,
    pub rounded: bool,
    pub rounding: RoundingMode,
    pub total: f64,
    /// The tip as the form displays it.
    pub formatted: String,
    pub formatted_bill: String,
    pub formatted_total: String,
    pub locale: String,
    pub currency: String,
}

impl TipReport {
    /// Build a report from a computed tip and the calculator that produced it.
    #[must_use]
    pub fn new(tip: &Tip, calc: &TipCalculator) -> Self {
        let formatter = calc.formatter();
        Self {
            bill: tip.bill,
            tip_percent: tip.tip_percent,
            raw_tip: tip.raw_tip,
            tip: tip.tip,
            rounded: tip.rounded,
            rounding: calc.rounding(),
            total: tip.total(),
            formatted: calc.format(tip),
            formatted_bill: formatter.format(tip.bill),
            formatted_total: formatter.format(tip.total()),
            locale: formatter.locale().to_string(),
            currency: formatter.code().to_string(),
        }
    }

    /// Serialize as a single-line JSON object.
    pub fn to_json(&self) -> Result<String, OutputError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Format a percentage without trailing zeros.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent}%")
}

/// Write the formatted tip to a file.
///
/// # Errors
///
/// Returns [`OutputError::Io`] if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, formatted: &str) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path.as_ref())?;
    writeln!(file, "{formatted}")?;
    tracing::debug!(path = %path.as_ref().display(), "wrote tip to file");
    Ok(())
}
