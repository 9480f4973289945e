//! Output module for solution and error lines
//!
//! This module provides tools to output lines in various formats:
//! - **Visualization**: PNG/SVG charts using plotters
//! - **Export**: CSV tables for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Charts
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── lines.rs
//! │   └── plotter.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! Both sub-modules consume plain [`Line`](crate::problem::Line)s, so they
//! work the same for solutions, local errors and global errors.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{FilePlotter, ImageFormat, PlotConfig, PlotError, Plotter, SvgPlotter, plot_lines};

pub use export::{CsvConfig, CsvError, CsvMetadata, export_lines_csv};
