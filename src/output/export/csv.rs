//! CSV export of line sets
//!
//! Writes solution or error lines that share their abscissae as one table:
//! an `x` column followed by one column per line, compatible with Excel,
//! Python pandas, MATLAB, and most data analysis tools.
//!
//! # Features
//!
//! - **Metadata support**: Optional `#` header with the problem parameters
//! - **Customizable**: Delimiter, decimal separator, precision
//! - **Validation**: Empty data, differing abscissae, NaN/Inf
//!
//! # Example
//!
//! ```rust,ignore
//! use ivp_rs::output::export::{export_lines_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_problem("y' = x^2 - 2y", 0.0, 1.0, 1.0, 10);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_lines_csv(&lines, "solutions.csv", Some(&config))?;
//! ```
//!
//! **Output** (`solutions.csv`):
//! ```csv
//! # Initial Value Problem Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Equation: y' = x^2 - 2y
//! # x0: 0
//! # y0: 1
//! # X: 1
//! # N: 10
//! #
//! x,Euler's method,Exact solution
//! 0.000000,1.000000,1.000000
//! 0.100000,0.800000,0.823413
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::error::Mismatch;
use crate::problem::Line;

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("no lines to export")]
    NoLines,

    #[error("line '{0}' has no points")]
    EmptyLine(String),

    /// Lines must share their abscissae to be written as one table
    #[error("line '{line}' does not share the abscissae of '{reference}': {kind}")]
    Mismatch {
        line: String,
        reference: String,
        kind: Mismatch,
    },

    #[error("invalid data: non-finite value in '{line}' at index {index}")]
    NonFinite { line: String, index: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use ivp_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Metadata written as `#` header comments, if any (default: None)
    pub metadata: Option<CsvMetadata>,

    /// Header of the abscissa column (default: "x")
    pub x_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            metadata: None,
            x_header: "x".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: set the abscissa header (`"N"` for global errors)
    pub fn x_header(mut self, header: impl Into<String>) -> Self {
        self.x_header = header.into();
        self
    }

    /// Builder pattern: write a metadata header
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    fn validate(&self) -> Result<(), CsvError> {
        if self.delimiter == self.decimal_separator {
            return Err(CsvError::Config(format!(
                "delimiter and decimal separator are both '{}'",
                self.delimiter
            )));
        }
        Ok(())
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Equation text (e.g. "y' = x^2 - 2y")
    pub equation: Option<String>,

    pub x0: Option<f64>,

    pub y0: Option<f64>,

    /// End of the interval
    pub x_end: Option<f64>,

    /// Number of steps of the grid
    pub steps: Option<usize>,

    /// Step-count sweep, for global-error tables
    pub sweep: Option<(usize, usize)>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata for one solved problem
    pub fn from_problem(equation: &str, x0: f64, y0: f64, x_end: f64, steps: usize) -> Self {
        Self {
            equation: Some(equation.to_string()),
            x0: Some(x0),
            y0: Some(y0),
            x_end: Some(x_end),
            steps: Some(steps),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header(out: &mut impl Write, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(out, "# Initial Value Problem Data")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(equation) = &metadata.equation {
        writeln!(out, "# Equation: {equation}")?;
    }
    if let Some(x0) = metadata.x0 {
        writeln!(out, "# x0: {x0}")?;
    }
    if let Some(y0) = metadata.y0 {
        writeln!(out, "# y0: {y0}")?;
    }
    if let Some(x_end) = metadata.x_end {
        writeln!(out, "# X: {x_end}")?;
    }
    if let Some(steps) = metadata.steps {
        writeln!(out, "# N: {steps}")?;
    }
    if let Some((n_min, n_max)) = metadata.sweep {
        writeln!(out, "# N range: {n_min}..={n_max}")?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {key}: {value}")?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Quote a header field when it contains the delimiter or a quote
fn header_field(name: &str, config: &CsvConfig) -> String {
    if name.contains(config.delimiter) || name.contains('"') {
        format!("\"{}\"", name.replace('"', "\"\""))
    } else {
        name.to_string()
    }
}

fn validate_lines(lines: &[Line]) -> Result<(), CsvError> {
    let Some(reference) = lines.first() else {
        return Err(CsvError::NoLines);
    };

    for line in lines {
        if line.is_empty() {
            return Err(CsvError::EmptyLine(line.name().to_string()));
        }

        let mismatch = |kind| CsvError::Mismatch {
            line: line.name().to_string(),
            reference: reference.name().to_string(),
            kind,
        };

        if line.len() != reference.len() {
            return Err(mismatch(Mismatch::Length {
                expected: reference.len(),
                found: line.len(),
            }));
        }

        for (index, (point, expected)) in line.points().iter().zip(reference.xs()).enumerate() {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(CsvError::NonFinite {
                    line: line.name().to_string(),
                    index,
                });
            }
            if point.x != expected {
                return Err(mismatch(Mismatch::Abscissa {
                    index,
                    expected,
                    found: point.x,
                }));
            }
        }
    }

    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Write lines to any writer as CSV
///
/// See [`export_lines_csv`] for the layout and the errors.
pub fn write_lines_csv(
    out: &mut impl Write,
    lines: &[Line],
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    // ============================= Validation =============================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    configuration.validate()?;
    validate_lines(lines)?;

    // ============================= Write Metadata =========================

    if let Some(metadata) = &configuration.metadata {
        write_metadata_header(out, metadata)?;
    }

    // ============================= Write Header ===========================

    write!(out, "{}", header_field(&configuration.x_header, configuration))?;
    for line in lines {
        write!(out, "{}{}", configuration.delimiter, header_field(line.name(), configuration))?;
    }
    writeln!(out)?;

    // ============================= Write Data =============================

    // lines[0] exists and all lines share its abscissae
    for (i, x) in lines[0].xs().enumerate() {
        write!(out, "{}", format_number(x, configuration))?;
        for line in lines {
            write!(
                out,
                "{}{}",
                configuration.delimiter,
                format_number(line.points()[i].y, configuration)
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Export lines that share their abscissae to a CSV file
///
/// The table has one `x` column followed by one column per line, headed by
/// the line name, in input order.
///
/// # Errors
///
/// - No lines, or an empty line
/// - Lines with differing lengths or abscissae (`CsvError::Mismatch`)
/// - NaN or Inf values
/// - Delimiter equal to the decimal separator
/// - File creation or write errors
pub fn export_lines_csv(
    lines: &[Line],
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    // Validate before touching the file system
    validate_lines(lines)?;

    let path = output_path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_lines_csv(&mut out, lines, configuration)?;
    out.flush()?;

    log::debug!("exported {} line(s) to {}", lines.len(), path.display());
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
