//! Remapping core.
//!
//! This module handles the source-row to destination-row transform:
//! - Rule: per-column value resolution
//! - Table: per-variant column list plus skip predicate
//! - Remap: one record in, zero or one record out

pub mod remap;
pub mod rule;
pub mod table;

pub use remap::remap;
pub use rule::{JoinStyle, Rule};
pub use table::{ColumnSpec, MappingTable, SkipRule};
