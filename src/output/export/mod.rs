//! Export module for solution and error lines.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use ivp_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//! exporter.export(&solutions, "solutions.csv".as_ref())?;
//! ```

use std::path::Path;

pub mod csv;

// Re-export the most commonly used types at the module level so users can write:
//   use ivp_rs::output::export::{CsvConfig, CsvError, CsvExporter};
pub use csv::{CsvConfig, CsvError, CsvMetadata, export_lines_csv, write_lines_csv};

use crate::problem::Line;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so the
/// caller can react precisely based on the error type.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports lines that share their abscissae.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `lines` is empty or the lines are not on the same abscissae
    fn export(&self, lines: &[Line], path: &Path) -> Result<(), Self::Error>;
}

/// CSV implementation of [`Exporter`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export(&self, lines: &[Line], path: &Path) -> Result<(), CsvError> {
        export_lines_csv(lines, path, Some(&self.config))
    }
}
