//! # tiptime-tui
//!
//! Interactive tip form using ratatui with Elm architecture.
//! The model owns the form state; every change recomputes the tip through
//! `tiptime_core::TipCalculator`.

pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod styles;

pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::{Field, FormApp};
