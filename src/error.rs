//! Error types for the transform jobs.
//!
//! Two recognized failure kinds: a missing input file (reported with the
//! offending path) and everything else (CSV or IO errors surfaced as-is).
//! Error conversion is automatic via `From` implementations, allowing `?`
//! to work across error boundaries.
//!
//! There are no retries and no per-row recovery: the first error aborts the
//! run, and rows already appended to the output stay on disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from running a transform job.
#[derive(Debug, Error)]
pub enum JobError {
    /// The fixed input path does not exist.
    #[error("could not find input file {}", .path.display())]
    InputMissing { path: PathBuf },

    /// CSV read or write failed, including malformed rows.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The output file could not be opened or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for job operations.
pub type JobResult<T> = Result<T, JobError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_missing_names_path() {
        let err = JobError::InputMissing {
            path: PathBuf::from("public/docs/EiP.csv"),
        };
        assert!(err.to_string().contains("public/docs/EiP.csv"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: JobError = io.into();
        assert!(err.to_string().contains("denied"));
    }
}
