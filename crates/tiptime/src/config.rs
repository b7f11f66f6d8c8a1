//! Application configuration from CLI flags and environment.

use clap::Parser;

/// TipTime-rs: tip calculator.
///
/// Computes a tip from a bill amount and a tip percentage. Unparseable
/// amounts count as 0 and unparseable percentages as 15.
#[derive(Parser, Debug)]
#[command(name = "tiptime", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Bill amount.
    #[arg(short, long, default_value = "", env = "TIPTIME_BILL", allow_hyphen_values = true)]
    pub bill: String,

    /// Tip percentage (how was the service?).
    #[arg(short, long, default_value = "", env = "TIPTIME_TIP", allow_hyphen_values = true)]
    pub tip: String,

    /// Round the tip to a whole currency unit.
    #[arg(short, long)]
    pub round_up: bool,

    /// Rounding mode used with --round-up: nearest or up.
    #[arg(long, default_value = "nearest")]
    pub rounding: String,

    /// Locale for currency formatting (e.g. "en-US", "de_DE.UTF-8").
    /// Defaults to LC_ALL, LC_MONETARY, or LANG.
    #[arg(long, env = "TIPTIME_LOCALE")]
    pub locale: Option<String>,

    /// List known locales and exit.
    #[arg(long)]
    pub list_locales: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the full breakdown (bill, percent, rounding, total).
    #[arg(short, long)]
    pub details: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the formatted tip to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the formatted tip).
    #[arg(short, long)]
    pub quiet: bool,

    /// Launch the interactive form.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
