//! `tiptime_core::compute` resolves its locale from the process environment.
//!
//! Kept to a single test so the environment changes below never race with
//! another test in this binary.

use std::env;

fn clear_locale_env() {
    for name in ["LC_ALL", "LC_MONETARY", "LANG"] {
        env::remove_var(name);
    }
}

#[test]
fn compute_follows_locale_environment() {
    clear_locale_env();
    assert_eq!(tiptime_core::compute("50", "abc", false), "$7.50");

    env::set_var("LANG", "de_DE.UTF-8");
    assert_eq!(tiptime_core::compute("50", "abc", false), "7,50\u{a0}€");

    env::set_var("LC_MONETARY", "ja_JP.UTF-8");
    assert_eq!(tiptime_core::compute("1234", "10", true), "¥123");

    env::set_var("LC_ALL", "en_GB.UTF-8");
    assert_eq!(tiptime_core::compute("33", "10", true), "£3.00");

    env::set_var("LC_ALL", "xx_XX.UTF-8");
    assert_eq!(tiptime_core::compute("33", "10", false), "¥3");

    clear_locale_env();
    env::set_var("LANG", "C");
    assert_eq!(tiptime_core::compute("-20", "15", false), "-$3.00");

    clear_locale_env();
}
