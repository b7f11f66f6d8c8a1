//! # tiptime-core
//!
//! Core library for the TipTime-rs tip calculator.
//! Parses free-form bill and tip-percent text, computes the tip, optionally
//! rounds it to a whole unit, and formats it in the active locale's currency.

pub mod calculator;
pub mod constants;
pub mod currency;
pub mod input;
pub mod locale;
pub mod rounding;

// Re-exports
pub use calculator::{calculate_tip, Tip, TipCalculator, TipError};
pub use constants::{exit_codes, DEFAULT_BILL_AMOUNT, DEFAULT_LOCALE, DEFAULT_TIP_PERCENT};
pub use currency::{CurrencyFormat, CurrencyFormatter, SymbolPosition};
pub use input::{BillAmount, TipInputs, TipPercent};
pub use rounding::RoundingMode;

/// Compute the formatted tip in the locale detected from the environment.
///
/// This is a convenience function for simple use cases. To pin a locale or
/// a rounding mode, build a [`TipCalculator`] directly.
///
/// # Example
/// ```
/// let tip = tiptime_core::compute("50", "abc", false);
/// assert!(tip.contains('7'));
/// ```
#[must_use]
pub fn compute(bill_text: &str, tip_percent_text: &str, round_up: bool) -> String {
    let calc = TipCalculator::new(std::sync::Arc::new(locale::detect()));
    calc.compute(bill_text, tip_percent_text, round_up)
}
