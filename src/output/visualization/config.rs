//! Plot configuration shared across the chart kinds
//!
//! The three charts of a comparison (solutions, local errors, global errors)
//! differ only in title and axis labels; everything else comes from one
//! [`PlotConfig`].

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_colors`: Optional colors, one per line in input order
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example: Custom Colors
///
/// ```rust
/// use ivp_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::solutions();
/// config.width = 1920;
/// config.height = 1080;
/// config.line_colors = Some(vec![RED, BLUE, GREEN, BLACK]);
/// ```
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: "x")
    pub xlabel: String,

    /// Y-axis label (default: "y")
    pub ylabel: String,

    /// Optional colors, one per line
    ///
    /// If None, uses default palette: [RED, BLUE, GREEN, MAGENTA, CYAN, ...]
    /// Lines beyond the end of the list fall back to the palette as well.
    pub line_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "x".to_string(),
            ylabel: "y".to_string(),
            line_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Title of the chart of method and exact solutions
pub const SOLUTIONS_TITLE: &str = "Solutions";

/// Title of the local truncation error chart
pub const LTE_TITLE: &str = "LTE";

/// Title of the global truncation error chart
pub const GTE_TITLE: &str = "GTE";

impl PlotConfig {
    /// Solution curves: y against x
    pub fn solutions() -> Self {
        Self::default().labelled(SOLUTIONS_TITLE, "x", "y")
    }

    /// Local truncation errors: |Δy| against x
    pub fn local_errors() -> Self {
        Self::default().labelled(LTE_TITLE, "x", "LTE")
    }

    /// Global truncation errors: max |Δy| against N
    ///
    /// ```rust
    /// use ivp_rs::output::visualization::PlotConfig;
    ///
    /// let config = PlotConfig::global_errors();
    /// assert_eq!((config.title.as_str(), config.xlabel.as_str()), ("GTE", "N"));
    /// ```
    pub fn global_errors() -> Self {
        Self::default().labelled(GTE_TITLE, "N", "max LTE")
    }

    /// Copy of this config with another title and axis labels
    pub fn labelled(&self, title: &str, xlabel: &str, ylabel: &str) -> Self {
        Self {
            title: title.to_string(),
            xlabel: xlabel.to_string(),
            ylabel: ylabel.to_string(),
            ..self.clone()
        }
    }

    /// Get color for the line at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn line_color(&self, line_index: usize) -> RGBColor {
        if let Some(color) = self
            .line_colors
            .as_ref()
            .and_then(|colors| colors.get(line_index))
        {
            return *color;
        }

        const PALETTE: [RGBColor; 10] = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),   // Orange
            RGBColor(128, 0, 128),   // Purple
            RGBColor(255, 192, 203), // Pink
            RGBColor(165, 42, 42),   // Brown
        ];

        PALETTE[line_index % PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
