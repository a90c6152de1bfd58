//! Row remapper.
//!
//! The single pure step shared by every job: one source record in, at most
//! one output record out.

use std::collections::HashMap;

use super::table::MappingTable;

/// Remap one source record through a mapping table.
///
/// Returns `None` when the table's skip predicate matches. Otherwise the
/// result holds one value per declared destination column, in declared
/// order — sources absent from the input header resolve to `""`, never to a
/// missing cell.
pub fn remap(record: &HashMap<String, String>, table: &MappingTable) -> Option<Vec<String>> {
    if table.skip.matches(record) {
        return None;
    }
    Some(table.columns.iter().map(|c| c.rule.apply(record)).collect())
}
