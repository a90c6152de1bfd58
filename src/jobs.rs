//! Job catalog.
//!
//! Each job pairs a fixed input/output path with its mapping table. Paths
//! are relative to the site checkout and are not configurable; the jobs
//! exist to regenerate the published data tables, nothing else.
//!
//! All five jobs append to their output. Only `secondary-metadata` suppresses
//! the header, since it extends a table another job already started.

use std::path::PathBuf;

use csv::QuoteStyle;

use crate::transform::{ColumnSpec, JoinStyle, MappingTable, SkipRule};

/// Master catalog export covering the print editions.
pub const EIP_CSV: &str = "public/docs/EiP.csv";
/// Follow-up export with secondary literature rows.
pub const EIP_SECONDARY_CSV: &str = "public/docs/EiP-secondary.csv";
/// Manuscript catalog export.
pub const EIP_MANUSCRIPTS_CSV: &str = "public/docs/EiP-manuscripts.csv";

/// Item table for print editions.
pub const ITEMS_PRINT_CSV: &str = "public/docs/items_print.csv";
/// Elements-content metadata table, shared by two jobs.
pub const METADATA_ELEMENTS_PRINT_CSV: &str = "public/docs/metadata_elements_print.csv";
/// Paratext transcription table.
pub const PARATEXT_TRANSCRIPTIONS_CSV: &str = "public/docs/paratext_transcriptions.csv";
/// Item table for manuscripts.
pub const ITEMS_MANUSCRIPT_CSV: &str = "public/docs/items_manuscript.csv";

/// Provenance tag seeded into `short_title_source`.
pub const ORIGIN_TAG: &str = "origin_eip_csv";

// =============================================================================
// JOB SPEC
// =============================================================================

/// One runnable transform: where to read, where to append, and how rows map.
#[derive(Debug, Clone)]
pub struct JobSpec {
    /// Job name as exposed on the command line.
    pub name: &'static str,
    /// Fixed input path.
    pub input: PathBuf,
    /// Fixed output path, opened in append mode.
    pub output: PathBuf,
    /// Whether to emit the destination header before the rows.
    pub write_header: bool,
    /// Explicit quoting override; `None` keeps the writer default.
    pub quoting: Option<QuoteStyle>,
    /// Column mapping for this job.
    pub table: MappingTable,
}

// =============================================================================
// JOB DEFINITIONS
// =============================================================================

/// EiP.csv -> items_print.csv: the main per-edition item table.
pub fn print_items() -> JobSpec {
    JobSpec {
        name: "print-items",
        input: PathBuf::from(EIP_CSV),
        output: PathBuf::from(ITEMS_PRINT_CSV),
        write_header: true,
        quoting: None,
        table: MappingTable::new(
            vec![
                ColumnSpec::copied("key", "key"),
                ColumnSpec::copied("short_title", "short_title"),
                ColumnSpec::tagged("short_title_source", ORIGIN_TAG, "title_source"),
                ColumnSpec::copied("year", "year"),
                ColumnSpec::copied("city", "city"),
                ColumnSpec::copied("language", "language"),
                ColumnSpec::combined("author_or_editor", "author", "editor_name", JoinStyle::Comma),
                ColumnSpec::copied("publisher", "publisher"),
                ColumnSpec::copied("format", "format"),
                ColumnSpec::copied("volumes", "volumes"),
                ColumnSpec::copied("ustc_id", "USTC_id"),
                ColumnSpec::copied("notes", "notes"),
            ],
            SkipRule::FieldEmpty("key"),
        ),
    }
}

/// EiP.csv -> metadata_elements_print.csv: which books each edition carries.
pub fn print_metadata() -> JobSpec {
    JobSpec {
        name: "print-metadata",
        input: PathBuf::from(EIP_CSV),
        output: PathBuf::from(METADATA_ELEMENTS_PRINT_CSV),
        write_header: true,
        quoting: None,
        table: MappingTable::new(
            vec![
                ColumnSpec::copied("key", "key"),
                ColumnSpec::designation_books("elements_books", "Elements_designation"),
                ColumnSpec::designation_extras("additional_content", "Elements_designation"),
                ColumnSpec::copied("wardhaugh_classification", "wClass"),
            ],
            SkipRule::BothEmpty("Elements_designation", "wClass"),
        ),
    }
}

/// EiP-secondary.csv -> metadata_elements_print.csv: secondary literature
/// rows appended to the table `print-metadata` starts, so no header.
pub fn secondary_metadata() -> JobSpec {
    JobSpec {
        name: "secondary-metadata",
        input: PathBuf::from(EIP_SECONDARY_CSV),
        output: PathBuf::from(METADATA_ELEMENTS_PRINT_CSV),
        write_header: false,
        quoting: None,
        table: MappingTable::new(
            vec![
                ColumnSpec::copied("key", "key"),
                ColumnSpec::blank("elements_books"),
                ColumnSpec::copied("additional_content", "books"),
                ColumnSpec::blank("wardhaugh_classification"),
            ],
            SkipRule::BothEmpty("books", "wClass"),
        ),
    }
}

/// EiP.csv -> paratext_transcriptions.csv: transcribed title pages and
/// imprints. Quoting is pinned to minimal because the cells are free text.
pub fn transcriptions() -> JobSpec {
    JobSpec {
        name: "transcriptions",
        input: PathBuf::from(EIP_CSV),
        output: PathBuf::from(PARATEXT_TRANSCRIPTIONS_CSV),
        write_header: true,
        quoting: Some(QuoteStyle::Necessary),
        table: MappingTable::new(
            vec![
                ColumnSpec::copied("key", "key"),
                ColumnSpec::copied("title", "title_transcription"),
                ColumnSpec::combined(
                    "imprint",
                    "imprint_transcription",
                    "imprint_continued",
                    JoinStyle::Colon,
                ),
                ColumnSpec::copied("colophon", "colophon_transcription"),
                ColumnSpec::copied("frontispiece", "frontispiece_transcription"),
            ],
            SkipRule::BothEmpty("title_transcription", "imprint_transcription"),
        ),
    }
}

/// EiP-manuscripts.csv -> items_manuscript.csv: the manuscript item table.
pub fn manuscript_items() -> JobSpec {
    JobSpec {
        name: "manuscript-items",
        input: PathBuf::from(EIP_MANUSCRIPTS_CSV),
        output: PathBuf::from(ITEMS_MANUSCRIPT_CSV),
        write_header: true,
        quoting: None,
        table: MappingTable::new(
            vec![
                ColumnSpec::copied("key", "key"),
                ColumnSpec::copied("short_title", "short_title"),
                ColumnSpec::copied("short_title_source", "title_source"),
                ColumnSpec::copied("year_from", "year_from"),
                ColumnSpec::copied("year_to", "year_to"),
                ColumnSpec::combined("notes", "notes", "provenance_notes", JoinStyle::Comma),
            ],
            SkipRule::FieldEmpty("key"),
        ),
    }
}

/// Every job, in the order they are meant to run.
///
/// `print-metadata` must precede `secondary-metadata` when regenerating from
/// scratch, since the latter appends to the former's output without a header.
pub fn all() -> Vec<JobSpec> {
    vec![
        print_items(),
        print_metadata(),
        secondary_metadata(),
        transcriptions(),
        manuscript_items(),
    ]
}
