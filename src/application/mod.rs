//! Application layer: the end-to-end describe workflow.

pub mod describe;

pub use describe::{render, run};
