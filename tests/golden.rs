//! Golden file integration tests.
//!
//! Reads tests/testdata/tip_golden.json and verifies the calculator produces
//! the recorded output for each raw input and locale.

use std::sync::Arc;

use serde::Deserialize;

use tiptime_core::locale;
use tiptime_core::{TipCalculator, TipInputs};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    bill: String,
    tip: String,
    round_up: bool,
    locale: String,
    expected: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/tip_golden.json");
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn calculator(tag: &str) -> TipCalculator {
    TipCalculator::new(Arc::new(locale::lookup(tag).expect("golden locale must be known")))
}

// ---------------------------------------------------------------------------
// Golden: formatted output
// ---------------------------------------------------------------------------

#[test]
fn golden_compute() {
    let data = load_golden_data();
    assert!(!data.cases.is_empty());
    for case in &data.cases {
        let out = calculator(&case.locale).compute(&case.bill, &case.tip, case.round_up);
        assert_eq!(
            out, case.expected,
            "compute({:?}, {:?}, {}) in {}",
            case.bill, case.tip, case.round_up, case.locale
        );
    }
}

#[test]
fn golden_calculate_then_format_matches_compute() {
    let data = load_golden_data();
    for case in &data.cases {
        let calc = calculator(&case.locale);
        let tip = calc.calculate(&TipInputs::from_text(&case.bill, &case.tip, case.round_up));
        assert_eq!(calc.format(&tip), case.expected, "{} / {}", case.bill, case.tip);
    }
}

// ---------------------------------------------------------------------------
// Golden: every case is stable across repeated calls
// ---------------------------------------------------------------------------

#[test]
fn golden_idempotent() {
    let data = load_golden_data();
    for case in &data.cases {
        let calc = calculator(&case.locale);
        let first = calc.compute(&case.bill, &case.tip, case.round_up);
        let second = calc.compute(&case.bill, &case.tip, case.round_up);
        assert_eq!(first, second);
    }
}

#[test]
fn golden_covers_every_locale() {
    let data = load_golden_data();
    for tag in ["en-US", "en-GB", "de-DE", "fr-FR", "ja-JP", "pt-BR", "zh-CN"] {
        assert!(
            data.cases.iter().any(|c| c.locale == tag),
            "no golden case for {tag}"
        );
    }
}
