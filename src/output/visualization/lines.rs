//! Line charts
//!
//! Every chart of the crate is the same picture: a set of named [`Line`]s
//! drawn on shared axes with a legend.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ivp_rs::output::visualization::{plot_lines, PlotConfig};
//!
//! // `.png` → bitmap, `.svg` → vector
//! plot_lines(&lines, "solutions.png", &PlotConfig::solutions())?;
//! ```

use std::path::Path;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use super::PlotError;
use super::config::PlotConfig;
use crate::problem::Line;

// =================================================================================================
// Public API
// =================================================================================================

/// Plot lines to an image file
///
/// # Arguments
///
/// * `lines`: Lines to draw, in legend order
/// * `output_path`: Output file path (`.svg` → vector, anything else → PNG)
/// * `config`: Plot configuration
///
/// # Errors
///
/// `PlotError` when there is nothing to draw, a value is not finite, or the
/// backend cannot write to `output_path`.
pub fn plot_lines(lines: &[Line], output_path: impl AsRef<Path>, config: &PlotConfig) -> Result<(), PlotError> {
    let bounds = Bounds::of(lines)?;
    let path = output_path.as_ref();

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            draw_lines(backend, lines, config, &bounds)
        }
        _ => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            draw_lines(backend, lines, config, &bounds)
        }
    }
}

/// Plot lines to an in-memory SVG document
pub fn render_svg(lines: &[Line], config: &PlotConfig) -> Result<String, PlotError> {
    let bounds = Bounds::of(lines)?;

    let mut svg = String::new();
    let backend = SVGBackend::with_string(&mut svg, (config.width, config.height));
    draw_lines(backend, lines, config, &bounds)?;

    Ok(svg)
}

// =================================================================================================
// Axis ranges
// =================================================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    /// Validate the lines and compute padded axis ranges
    fn of(lines: &[Line]) -> Result<Self, PlotError> {
        if lines.is_empty() {
            return Err(PlotError::NoLines);
        }

        let mut bounds = Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };

        for line in lines {
            if line.is_empty() {
                return Err(PlotError::EmptyLine(line.name().to_string()));
            }
            for (index, point) in line.points().iter().enumerate() {
                if !point.x.is_finite() || !point.y.is_finite() {
                    return Err(PlotError::NonFinite {
                        name: line.name().to_string(),
                        index,
                    });
                }
                bounds.x_min = bounds.x_min.min(point.x);
                bounds.x_max = bounds.x_max.max(point.x);
                bounds.y_min = bounds.y_min.min(point.y);
                bounds.y_max = bounds.y_max.max(point.y);
            }
        }

        let (x_min, x_max) = widen(bounds.x_min, bounds.x_max, 0.0);
        let (y_min, y_max) = widen(bounds.y_min, bounds.y_max, 0.05);

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

/// Pad a range by `margin` of its span; a degenerate range gets ±0.5
fn widen(min: f64, max: f64, margin: f64) -> (f64, f64) {
    let span = max - min;
    if span <= 0.0 {
        return (min - 0.5, max + 0.5);
    }
    (min - margin * span, max + margin * span)
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Render the lines with the given drawing backend
fn draw_lines<DB: DrawingBackend>(
    backend: DB,
    lines: &[Line],
    config: &PlotConfig,
    bounds: &Bounds,
) -> Result<(), PlotError>
where
    DB::ErrorType: 'static,
{
    draw_chart(backend, lines, config, bounds).map_err(|e| PlotError::Backend(e.to_string()))
}

fn draw_chart<DB: DrawingBackend>(
    backend: DB,
    lines: &[Line],
    config: &PlotConfig,
    bounds: &Bounds,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for (index, line) in lines.iter().enumerate() {
        let color = config.line_color(index);

        chart
            .draw_series(LineSeries::new(
                line.points().iter().map(|p| (p.x, p.y)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(line.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
