//! # Eipload - EiP catalog export to site data tables
//!
//! Eipload regenerates the published data tables of the Euclid in Print site
//! from the catalog CSV exports under `public/docs/`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  EiP*.csv   │────▶│   Reader    │────▶│   Remap     │────▶│  table CSV  │
//! │  (exports)  │     │  (headered) │     │ (per-table) │     │  (append)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eipload::{jobs, runner};
//!
//! fn main() {
//!     let report = runner::run(&jobs::print_items()).unwrap();
//!     println!("{}", report.summary());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Job error types
//! - [`transform`] - Rules, mapping tables, row remapping
//! - [`jobs`] - The five fixed job definitions
//! - [`runner`] - Shared drive loop and run report

// Core modules
pub mod error;

// Remapping
pub mod transform;

// Job catalog
pub mod jobs;

// Drive loop
pub mod runner;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{JobError, JobResult};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{remap, ColumnSpec, JoinStyle, MappingTable, Rule, SkipRule};

// =============================================================================
// Re-exports - Jobs
// =============================================================================

pub use jobs::JobSpec;

// =============================================================================
// Re-exports - Runner
// =============================================================================

pub use runner::{run, RunReport};
