//! Interactive prompt adapters

pub mod console_select;

pub use console_select::{ConsoleSelect, KeyOutcome, SelectState};
