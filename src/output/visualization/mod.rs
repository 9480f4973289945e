//! Visualization of solution and error lines
//!
//! This module renders sets of [`Line`](crate::problem::Line)s using the
//! `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **lines**: The line chart itself, to a file (`plot_lines`) or to an
//!   in-memory SVG document (`render_svg`)
//! - **plotter**: The [`Plotter`] capability used by the solving service,
//!   with an in-memory ([`SvgPlotter`]) and a file ([`FilePlotter`]) renderer
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ivp_rs::output::visualization::{plot_lines, PlotConfig};
//!
//! let lines = service::solve_all(&scenario, &grid, &solvers)?;
//!
//! // Plot with a chart's default config
//! plot_lines(&lines, "solutions.png", &PlotConfig::solutions())?;
//!
//! // Or adjust it
//! let mut config = PlotConfig::global_errors();
//! config.line_width = 3;
//! plot_lines(&gte, "gte.svg", &config)?;
//! ```
//!
//! # Text rendering
//!
//! Captions, axis labels and legends need a system font. On a machine
//! without fonts, rendering fails with [`PlotError::Backend`];
//! [`fonts_available`] checks for that up front.

use plotters::style::IntoFont;
use thiserror::Error;

pub mod config;
mod lines;
mod plotter;

pub use config::{GTE_TITLE, LTE_TITLE, PlotConfig, SOLUTIONS_TITLE};
pub use lines::{plot_lines, render_svg};
pub use plotter::{FilePlotter, ImageFormat, Plotter, SvgPlotter};

/// Whether the sans-serif font used for chart text can be loaded
pub fn fonts_available() -> bool {
    ("sans-serif", 12).into_font().box_size("Ag").is_ok()
}

/// Errors raised while rendering a chart
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("no lines to plot")]
    NoLines,

    #[error("line '{0}' has no points")]
    EmptyLine(String),

    #[error("line '{name}' has a non-finite value at index {index}")]
    NonFinite { name: String, index: usize },

    /// Drawing backend failure (font lookup, encoding, file creation)
    #[error("drawing backend failed: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
