//! Defaults and exit codes.

/// Bill amount used when the bill text is empty or unparseable.
pub const DEFAULT_BILL_AMOUNT: f64 = 0.0;

/// Tip percentage used when the tip text is empty or unparseable.
pub const DEFAULT_TIP_PERCENT: f64 = 15.0;

/// Locale used when none is configured and the environment names none we know.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Environment variables consulted for the active locale, in priority order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, terminal).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (unknown locale, bad rounding mode).
    pub const ERROR_CONFIG: i32 = 4;
}
