//! # tiptime-cli
//!
//! CLI output, JSON reports, styled messages, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use output::{OutputError, TipReport};
pub use presenter::{CLIResultPresenter, ResultPresenter};
