//! The tip calculator.
//!
//! `TipCalculator::compute` is the whole user-facing contract: raw form text
//! in, formatted currency out. It never fails; unusable numbers fall back to
//! the documented defaults before any arithmetic happens.

use std::sync::Arc;

use serde::Serialize;

use crate::currency::CurrencyFormatter;
use crate::input::TipInputs;
use crate::rounding::RoundingMode;

/// Error type for configuring a calculator.
#[derive(Debug, thiserror::Error)]
pub enum TipError {
    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// No currency conventions known for this locale.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

/// Compute `amount * tip_percent / 100`, rounded to a whole unit if requested.
#[must_use]
pub fn calculate_tip(amount: f64, tip_percent: f64, round_up: bool, mode: RoundingMode) -> f64 {
    let tip = amount * tip_percent / 100.0;
    if round_up {
        mode.apply(tip)
    } else {
        tip
    }
}

/// Breakdown of one tip computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tip {
    pub bill: f64,
    pub tip_percent: f64,
    /// Tip before rounding.
    pub raw_tip: f64,
    /// Tip as displayed.
    pub tip: f64,
    pub rounded: bool,
}

impl Tip {
    /// Bill plus tip.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.bill + self.tip
    }
}

/// Maps form inputs to a formatted tip.
#[derive(Clone)]
pub struct TipCalculator {
    formatter: Arc<dyn CurrencyFormatter>,
    rounding: RoundingMode,
}

impl TipCalculator {
    /// Create a calculator formatting through `formatter`.
    #[must_use]
    pub fn new(formatter: Arc<dyn CurrencyFormatter>) -> Self {
        Self {
            formatter,
            rounding: RoundingMode::default(),
        }
    }

    /// Use `mode` when the round-up flag is set.
    #[must_use]
    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    #[must_use]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    #[must_use]
    pub fn formatter(&self) -> &dyn CurrencyFormatter {
        self.formatter.as_ref()
    }

    /// Parse the raw form text, compute the tip, and format it.
    #[must_use]
    pub fn compute(&self, bill_text: &str, tip_percent_text: &str, round_up: bool) -> String {
        let inputs = TipInputs::from_text(bill_text, tip_percent_text, round_up);
        self.format(&self.calculate(&inputs))
    }

    /// Compute the tip breakdown for already-parsed inputs.
    #[must_use]
    pub fn calculate(&self, inputs: &TipInputs) -> Tip {
        let bill = inputs.bill.value();
        let tip_percent = inputs.tip_percent.value();
        let raw_tip = calculate_tip(bill, tip_percent, false, self.rounding);
        let tip = calculate_tip(bill, tip_percent, inputs.round_up, self.rounding);
        Tip {
            bill,
            tip_percent,
            raw_tip,
            tip,
            rounded: inputs.round_up,
        }
    }

    /// Format the displayed tip.
    #[must_use]
    pub fn format(&self, tip: &Tip) -> String {
        self.formatter.format(tip.tip)
    }
}

impl std::fmt::Debug for TipCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TipCalculator")
            .field("locale", &self.formatter.locale())
            .field("rounding", &self.rounding)
            .finish()
    }
}
