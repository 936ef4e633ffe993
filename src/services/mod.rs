//! Service layer: the pure table-building logic and the interactive
//! type collection pass.

pub mod table_builder;
pub mod type_collector;

pub use table_builder::{input_table, output_table, Column, TableData, NOT_AVAILABLE};
pub use type_collector::{CollectionSummary, TypeCollector};
