#![no_main]

use libfuzzer_sys::fuzz_target;

use tiptime_core::locale;

fuzz_target!(|data: &[u8]| {
    let tag = String::from_utf8_lossy(data);

    // Unknown tags are errors, never panics
    if let Ok(format) = locale::lookup(&tag) {
        assert!(locale::available().contains(&format.locale));
    }
});
