//! Job runner.
//!
//! The shared drive loop: open the input, stream rows through the mapping
//! table, append the results, report. The output file is opened in append
//! mode and created if absent, so re-running a job duplicates its rows; a
//! clean regeneration starts from deleted outputs.
//!
//! Failure is fail-fast and non-transactional. Rows appended before an error
//! stay on disk, and running two jobs against the same output concurrently
//! is not supported.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::PathBuf;

use csv::{Reader, WriterBuilder};
use tracing::{debug, info};

use crate::error::{JobError, JobResult};
use crate::jobs::JobSpec;
use crate::transform::remap;

/// Outcome of one completed job run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Data rows appended, header excluded.
    pub written: usize,
    /// Source rows dropped by the skip predicate.
    pub skipped: usize,
}

impl RunReport {
    /// One-line success summary for stdout.
    pub fn summary(&self) -> String {
        format!(
            "Successfully transformed {} to {} - with {} records.",
            self.input.display(),
            self.output.display(),
            self.written
        )
    }
}

/// Run one job end to end.
///
/// The input path is checked before the output is opened, so a missing input
/// never creates or touches the output file.
pub fn run(job: &JobSpec) -> JobResult<RunReport> {
    if !job.input.exists() {
        return Err(JobError::InputMissing {
            path: job.input.clone(),
        });
    }

    let mut reader = Reader::from_path(&job.input)?;

    let out = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&job.output)?;
    let mut builder = WriterBuilder::new();
    if let Some(style) = job.quoting {
        builder.quote_style(style);
    }
    let mut writer = builder.from_writer(out);

    if job.write_header {
        writer.write_record(job.table.destinations())?;
    }

    let mut written = 0usize;
    let mut skipped = 0usize;
    for row in reader.deserialize::<HashMap<String, String>>() {
        let record = row?;
        match remap(&record, &job.table) {
            Some(values) => {
                writer.write_record(&values)?;
                written += 1;
            }
            None => skipped += 1,
        }
    }
    writer.flush()?;

    info!(job = job.name, written, skipped, "job finished");
    debug!(
        input = %job.input.display(),
        output = %job.output.display(),
        "paths"
    );

    Ok(RunReport {
        input: job.input.clone(),
        output: job.output.clone(),
        written,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{ColumnSpec, MappingTable, SkipRule};
    use std::fs;
    use std::path::Path;

    fn test_job(dir: &Path, write_header: bool) -> JobSpec {
        JobSpec {
            name: "test-job",
            input: dir.join("in.csv"),
            output: dir.join("out.csv"),
            write_header,
            quoting: None,
            table: MappingTable::new(
                vec![
                    ColumnSpec::copied("key", "key"),
                    ColumnSpec::copied("short_title", "title"),
                ],
                SkipRule::FieldEmpty("key"),
            ),
        }
    }

    #[test]
    fn test_run_writes_header_and_mapped_rows() {
        let dir = tempfile::tempdir().unwrap();
        let job = test_job(dir.path(), true);
        fs::write(&job.input, "key,title\na1,Ratdolt 1482\n,orphan\na2,Zamberti 1505\n").unwrap();

        let report = run(&job).unwrap();
        assert_eq!(report.written, 2);
        assert_eq!(report.skipped, 1);

        let out = fs::read_to_string(&job.output).unwrap();
        assert_eq!(
            out,
            "key,short_title\na1,Ratdolt 1482\na2,Zamberti 1505\n"
        );
    }

    #[test]
    fn test_run_without_header_writes_rows_only() {
        let dir = tempfile::tempdir().unwrap();
        let job = test_job(dir.path(), false);
        fs::write(&job.input, "key,title\na1,Ratdolt 1482\n").unwrap();

        run(&job).unwrap();
        let out = fs::read_to_string(&job.output).unwrap();
        assert_eq!(out, "a1,Ratdolt 1482\n");
    }

    #[test]
    fn test_rerun_appends_duplicate_rows() {
        let dir = tempfile::tempdir().unwrap();
        let job = test_job(dir.path(), false);
        fs::write(&job.input, "key,title\na1,Ratdolt 1482\n").unwrap();

        run(&job).unwrap();
        run(&job).unwrap();
        let out = fs::read_to_string(&job.output).unwrap();
        assert_eq!(out, "a1,Ratdolt 1482\na1,Ratdolt 1482\n");
    }

    #[test]
    fn test_missing_input_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let job = test_job(dir.path(), true);

        let err = run(&job).unwrap_err();
        assert!(matches!(err, JobError::InputMissing { .. }));
        assert!(!job.output.exists());
    }

    #[test]
    fn test_summary_format() {
        let report = RunReport {
            input: PathBuf::from("public/docs/EiP.csv"),
            output: PathBuf::from("public/docs/items_print.csv"),
            written: 12,
            skipped: 3,
        };
        assert_eq!(
            report.summary(),
            "Successfully transformed public/docs/EiP.csv to public/docs/items_print.csv - with 12 records."
        );
    }
}
