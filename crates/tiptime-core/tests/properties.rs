//! Property-based tests for the tip calculator.
//!
//! These pin the locale to en-US so results do not depend on the host
//! environment.

use std::sync::Arc;

use proptest::prelude::*;

use tiptime_core::currency::CurrencyFormatter;
use tiptime_core::locale;
use tiptime_core::{RoundingMode, TipCalculator, TipInputs};

fn usd() -> TipCalculator {
    TipCalculator::new(Arc::new(locale::lookup("en-US").unwrap()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For valid decimal text, compute formats amount * percent / 100.
    #[test]
    fn compute_matches_formula(bill in -100_000.0f64..100_000.0, percent in -100.0f64..100.0) {
        let calc = usd();
        let usd_format = locale::lookup("en-US").unwrap();
        let bill_text = format!("{bill}");
        let percent_text = format!("{percent}");
        let expected = usd_format.format(bill * percent / 100.0);
        prop_assert_eq!(calc.compute(&bill_text, &percent_text, false), expected);
    }

    /// Rounded tips are always whole numbers.
    #[test]
    fn rounded_tip_is_whole(bill in 0.0f64..10_000.0, percent in 0.0f64..50.0) {
        for mode in [RoundingMode::Nearest, RoundingMode::Up] {
            let calc = usd().with_rounding(mode);
            let tip = calc.calculate(&TipInputs::from_text(&bill.to_string(), &percent.to_string(), true));
            prop_assert!((tip.tip - tip.tip.trunc()).abs() < f64::EPSILON);
            prop_assert!((tip.tip - tip.raw_tip).abs() <= 1.0);
        }
    }

    /// Nearest rounding never moves the tip by more than half a unit.
    #[test]
    fn nearest_moves_at_most_half(bill in 0.0f64..10_000.0, percent in 0.0f64..50.0) {
        let tip = usd().calculate(&TipInputs::from_text(&bill.to_string(), &percent.to_string(), true));
        prop_assert!((tip.tip - tip.raw_tip).abs() <= 0.5);
    }

    /// Arbitrary text never panics and always yields a dollar amount.
    #[test]
    fn compute_never_panics(bill in ".*", percent in ".*", round_up in any::<bool>()) {
        let out = usd().compute(&bill, &percent, round_up);
        prop_assert!(out.contains('$'));
    }

    /// Same inputs, same output.
    #[test]
    fn compute_is_idempotent(bill in "[0-9]{0,6}(\\.[0-9]{0,3})?", percent in "[0-9]{0,3}", round_up in any::<bool>()) {
        let calc = usd();
        prop_assert_eq!(calc.compute(&bill, &percent, round_up), calc.compute(&bill, &percent, round_up));
    }

    /// Unparseable tip text behaves exactly like 15 percent.
    #[test]
    fn bad_percent_is_fifteen(bill in 0.0f64..10_000.0, junk in "[a-z]{1,8}") {
        let calc = usd();
        let bill_text = bill.to_string();
        prop_assert_eq!(calc.compute(&bill_text, &junk, false), calc.compute(&bill_text, "15", false));
    }
}

#[test]
fn documented_examples() {
    let calc = usd();
    assert_eq!(calc.compute("", "", false), "$0.00");
    assert_eq!(calc.compute("abc", "20", false), "$0.00");
    assert_eq!(calc.compute("50", "abc", false), "$7.50");
    assert_eq!(calc.compute("50", "18", true), "$9.00");
    assert_eq!(calc.compute("33", "10", true), "$3.00");
}

#[test]
fn every_known_locale_formats_zero() {
    for tag in locale::available() {
        let calc = TipCalculator::new(Arc::new(locale::lookup(tag).unwrap()));
        let out = calc.compute("", "", false);
        assert!(out.contains('0'), "{tag}: {out}");
        assert!(!out.starts_with('-'), "{tag}: {out}");
    }
}
