//! Drawing [`ChartSpec`]s to image files.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::chart::{self, Axis, ChartSpec, Rgb};
use crate::config::ChartsConfig;
use crate::error::{GainsError, Result};

pub trait ChartRenderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<()>;
}

/// PNG output through the plotters bitmap backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapRenderer;

impl ChartRenderer for BitmapRenderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<()> {
        draw_bitmap(chart, path)
            .map_err(|err| GainsError::Render(format!("{}: {err}", path.display())))
    }
}

/// Builds both charts and hands them to `renderer`, one file at a time.
/// Returns the paths written, in order.
pub fn render_all(
    renderer: &dyn ChartRenderer,
    charts: &ChartsConfig,
    gain_factor: f64,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let jobs = [
        (
            chart::gain_vs_success_chart(
                charts.gain_chart_skill,
                gain_factor,
                (charts.gain_width, charts.gain_height),
            ),
            chart::GAINS_VS_SUCCESS_FILE,
        ),
        (
            chart::magery_circles_chart(gain_factor, (charts.circles_width, charts.circles_height)),
            chart::MAGERY_CIRCLES_FILE,
        ),
    ];

    let mut written = Vec::with_capacity(jobs.len());
    for (spec, file_name) in &jobs {
        let path = out_dir.join(file_name);
        renderer.render(spec, &path)?;
        info!(path = %path.display(), series = spec.series.len(), "chart written");
        written.push(path);
    }
    Ok(written)
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn finite_points(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

/// `(min, max)` of `values`, widened so the range is never empty.
fn fit_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < 1e-12 {
        return (lo - 1.0, hi + 1.0);
    }
    (lo, hi)
}

fn axis_bounds(axis: &Axis, values: impl Iterator<Item = f64>) -> (f64, f64) {
    axis.bounds.unwrap_or_else(|| fit_bounds(values))
}

fn draw_bitmap(chart: &ChartSpec, path: &Path) -> std::result::Result<(), Box<dyn Error>> {
    let background = rgb(chart.theme.background);
    let foreground = rgb(chart.theme.foreground);

    let series: Vec<Vec<(f64, f64)>> = chart
        .series
        .iter()
        .map(|s| finite_points(&s.points))
        .collect();
    let (x_lo, x_hi) = axis_bounds(&chart.x_axis, series.iter().flatten().map(|p| p.0));
    let (y_lo, y_hi) = axis_bounds(&chart.y_axis, series.iter().flatten().map(|p| p.1));

    let root = BitMapBackend::new(path, chart.size).into_drawing_area();
    root.fill(&background)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 20).into_font().color(&foreground))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    let x_precision = chart.x_axis.precision;
    let y_precision = chart.y_axis.precision;
    let x_fmt = |v: &f64| format!("{:.*}", x_precision, v);
    let y_fmt = |v: &f64| format!("{:.*}", y_precision, v);

    ctx.configure_mesh()
        .x_desc(chart.x_axis.desc.as_str())
        .y_desc(chart.y_axis.desc.as_str())
        .x_labels(chart.x_axis.labels)
        .y_labels(chart.y_axis.labels)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .axis_style(foreground)
        .bold_line_style(foreground.mix(0.3))
        .light_line_style(foreground.mix(0.1))
        .label_style(("sans-serif", 12).into_font().color(&foreground))
        .axis_desc_style(("sans-serif", 15).into_font().color(&foreground))
        .draw()?;

    for (spec, points) in chart.series.iter().zip(series) {
        let color = rgb(spec.color);
        let drawn = ctx.draw_series(LineSeries::new(points, &color))?;
        if let Some(name) = &spec.name {
            drawn
                .label(name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
    }

    if chart.legend {
        ctx.configure_series_labels()
            .background_style(background.mix(0.8))
            .border_style(foreground)
            .label_font(("sans-serif", 15).into_font().color(&foreground))
            .draw()?;
    }

    root.present()?;
    Ok(())
}
