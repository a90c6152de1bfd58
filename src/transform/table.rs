//! Mapping table definition.
//!
//! A [`MappingTable`] is the static per-variant description of the output
//! shape: the ordered destination columns with their rules, plus the
//! predicate deciding which source rows are skipped. Tables are fixed at
//! compile time; there is no runtime configuration.

use std::collections::HashMap;

use super::rule::{JoinStyle, Rule};

/// One destination column and the rule producing its value.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub rule: Rule,
}

impl ColumnSpec {
    /// Direct copy from one source column.
    pub fn copied(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Copy { source },
        }
    }

    /// Two-field combine.
    pub fn combined(
        name: &'static str,
        first: &'static str,
        second: &'static str,
        style: JoinStyle,
    ) -> Self {
        Self {
            name,
            rule: Rule::Combine {
                first,
                second,
                style,
            },
        }
    }

    /// Books segment of the designation split.
    pub fn designation_books(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            rule: Rule::DesignationBooks { source },
        }
    }

    /// Remainder segment of the designation split.
    pub fn designation_extras(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            rule: Rule::DesignationExtras { source },
        }
    }

    /// Tag accumulator.
    pub fn tagged(name: &'static str, tag: &'static str, source: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Tagged { tag, source },
        }
    }

    /// Declared but never populated by this variant.
    pub fn blank(name: &'static str) -> Self {
        Self {
            name,
            rule: Rule::Blank,
        }
    }
}

/// Predicate deciding whether a source row is skipped before remapping.
///
/// Evaluated against the raw source cells, never against derived output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipRule {
    /// Emit every row.
    Never,
    /// Skip when the named field is empty or absent.
    FieldEmpty(&'static str),
    /// Skip when both named fields are empty or absent.
    BothEmpty(&'static str, &'static str),
}

impl SkipRule {
    /// Whether this row should be skipped.
    pub fn matches(&self, record: &HashMap<String, String>) -> bool {
        match self {
            SkipRule::Never => false,
            SkipRule::FieldEmpty(field) => is_empty(record, field),
            SkipRule::BothEmpty(a, b) => is_empty(record, a) && is_empty(record, b),
        }
    }

    /// Source fields the predicate reads.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            SkipRule::Never => Vec::new(),
            SkipRule::FieldEmpty(field) => vec![field],
            SkipRule::BothEmpty(a, b) => vec![a, b],
        }
    }
}

fn is_empty(record: &HashMap<String, String>, field: &str) -> bool {
    record.get(field).map(String::is_empty).unwrap_or(true)
}

/// A complete per-variant mapping: destination columns plus skip predicate.
#[derive(Debug, Clone)]
pub struct MappingTable {
    pub columns: Vec<ColumnSpec>,
    pub skip: SkipRule,
}

impl MappingTable {
    pub fn new(columns: Vec<ColumnSpec>, skip: SkipRule) -> Self {
        Self { columns, skip }
    }

    /// Destination header, in declared order.
    pub fn destinations(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// All source columns referenced by the rules or the skip predicate,
    /// deduplicated.
    pub fn source_columns(&self) -> Vec<&'static str> {
        let mut columns: Vec<&'static str> = self
            .columns
            .iter()
            .flat_map(|c| c.rule.sources())
            .collect();
        columns.extend(self.skip.fields());
        columns.sort_unstable();
        columns.dedup();
        columns
    }
}
