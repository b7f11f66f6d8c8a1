//! Free-form text inputs and their fallback defaults.
//!
//! Parsing never fails: text that does not describe a usable number resolves
//! to the documented default for that field.

use serde::Serialize;

use crate::constants::{DEFAULT_BILL_AMOUNT, DEFAULT_TIP_PERCENT};

/// Parse a decimal number from free-form text.
///
/// Surrounding whitespace is ignored, as is a single trailing `d`/`f` type
/// suffix (`"5d"`, `"2.5F"`). Returns `None` for empty text, text that is not
/// a float literal, and non-finite values (`NaN`, `inf`, or literals that
/// overflow `f64`).
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let literal = trimmed
        .strip_suffix(['d', 'D', 'f', 'F'])
        .unwrap_or(trimmed);
    if literal.is_empty() {
        return None;
    }
    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Bill amount. Always finite; may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BillAmount(f64);

impl BillAmount {
    /// Parse a bill amount, falling back to `0.0`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match parse_decimal(text) {
            Some(v) => Self(v),
            None => {
                tracing::trace!(input = text, "bill amount unparseable, using default");
                Self(DEFAULT_BILL_AMOUNT)
            }
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for BillAmount {
    fn default() -> Self {
        Self(DEFAULT_BILL_AMOUNT)
    }
}

/// Tip percentage. Always finite; may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipPercent(f64);

impl TipPercent {
    /// Parse a tip percentage, falling back to `15.0`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if let Some(v) = parse_decimal(text) {
            Self(v)
        } else {
            tracing::trace!(input = text, "tip percent unparseable, using default");
            Self(DEFAULT_TIP_PERCENT)
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for TipPercent {
    fn default() -> Self {
        Self(DEFAULT_TIP_PERCENT)
    }
}

/// The three form inputs, as read for one recomputation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TipInputs {
    pub bill: BillAmount,
    pub tip_percent: TipPercent,
    pub round_up: bool,
}

impl TipInputs {
    /// Build inputs from raw form text.
    #[must_use]
    pub fn from_text(bill_text: &str, tip_percent_text: &str, round_up: bool) -> Self {
        Self {
            bill: BillAmount::parse(bill_text),
            tip_percent: TipPercent::parse(tip_percent_text),
            round_up,
        }
    }
}
