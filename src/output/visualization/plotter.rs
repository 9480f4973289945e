//! Plotting collaborator
//!
//! The numerical core only needs "render named point series to an image";
//! [`Plotter`] is that capability. The bytes it returns are opaque to the
//! caller.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::PlotError;
use super::config::PlotConfig;
use super::lines::{plot_lines, render_svg};
use crate::problem::Line;

/// Render a set of lines to an encoded image
pub trait Plotter: Send + Sync {
    fn render(&self, title: &str, x_label: &str, y_label: &str, lines: &[Line]) -> Result<Vec<u8>, PlotError>;
}

/// In-memory SVG renderer
///
/// ```rust,ignore
/// use ivp_rs::output::visualization::{Plotter, SvgPlotter};
///
/// let bytes = SvgPlotter::default().render("Solutions", "x", "y", &lines)?;
/// assert!(bytes.starts_with(b"<svg"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SvgPlotter {
    config: PlotConfig,
}

impl SvgPlotter {
    /// Renderer using `config` for everything except title and axis labels
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }
}

impl Plotter for SvgPlotter {
    fn render(&self, title: &str, x_label: &str, y_label: &str, lines: &[Line]) -> Result<Vec<u8>, PlotError> {
        let config = self.config.labelled(title, x_label, y_label);
        render_svg(lines, &config).map(String::into_bytes)
    }
}

// =================================================================================================
// Image files
// =================================================================================================

/// Image file format written by [`FilePlotter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(ImageFormat::Svg),
            "png" => Ok(ImageFormat::Png),
            other => Err(format!("unknown image format '{other}', expected svg or png")),
        }
    }
}

/// Renderer that writes one image file per chart into a directory
///
/// The file name is derived from the chart title (`"Solutions"` →
/// `solutions.svg`). `render` returns the bytes of the written file.
#[derive(Debug, Clone)]
pub struct FilePlotter {
    directory: PathBuf,
    format: ImageFormat,
    config: PlotConfig,
}

impl FilePlotter {
    pub fn new(directory: impl Into<PathBuf>, format: ImageFormat) -> Self {
        Self {
            directory: directory.into(),
            format,
            config: PlotConfig::default(),
        }
    }

    /// Builder pattern: set the base plot configuration
    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Path of the file written for a chart titled `title`
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{}", file_stem(title), self.format.extension()))
    }
}

impl Plotter for FilePlotter {
    fn render(&self, title: &str, x_label: &str, y_label: &str, lines: &[Line]) -> Result<Vec<u8>, PlotError> {
        let path = self.path_for(title);
        let config = self.config.labelled(title, x_label, y_label);

        plot_lines(lines, &path, &config)?;
        log::info!("wrote {}", path.display());

        Ok(std::fs::read(&path)?)
    }
}

/// Lowercase title with every non-alphanumeric run replaced by `_`
fn file_stem(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }

    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "chart".to_string()
    } else {
        stem.to_string()
    }
}
