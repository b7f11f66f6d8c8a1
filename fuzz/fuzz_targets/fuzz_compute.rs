#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use tiptime_core::{locale, TipCalculator};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte: round-up flag and split point between bill and percent text
    let round_up = data[0] & 1 == 1;
    let rest = &data[1..];
    let split = usize::from(data[0] >> 1).min(rest.len());
    let bill = String::from_utf8_lossy(&rest[..split]);
    let percent = String::from_utf8_lossy(&rest[split..]);

    let format = locale::lookup("en-US").unwrap();
    let calc = TipCalculator::new(Arc::new(format));

    // Should not panic, and the same text gives the same answer
    let first = calc.compute(&bill, &percent, round_up);
    let second = calc.compute(&bill, &percent, round_up);
    assert_eq!(first, second);
    assert!(first.contains('$'));
});
