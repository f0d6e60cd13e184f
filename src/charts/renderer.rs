//! Static Chart Renderer
//! Rasterizes the scatter figure in memory with plotters, for headless use.
//!
//! Layout mirrors the interactive window:
//! 1. Title caption centered on top
//! 2. Mesh with axis descriptions (grid lines unless disabled)
//! 3. One filled circle per point
//! 4. Legend box with a single series entry

use crate::charts::{Displayable, ScatterStyle};
use crate::error::{PlotterError, Result};
use image::RgbImage;
use plotters::prelude::*;
use std::ops::Range as Span;
use tracing::debug;

// Fraction of the data span added on each side of the axes
const AXIS_PADDING: f64 = 0.05;

fn draw_err<E: std::fmt::Debug>(e: E) -> PlotterError {
    PlotterError::Display(format!("{e:?}"))
}

/// Padded axis spans covering every finite point.
fn axis_spans(points: &[[f64; 2]]) -> (Span<f64>, Span<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for &[x, y] in points {
        if x.is_finite() && y.is_finite() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    (pad(x_min, x_max), pad(y_min, y_max))
}

fn pad(min: f64, max: f64) -> Span<f64> {
    if min.is_infinite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span == 0.0 {
        return (min - 1.0)..(max + 1.0);
    }
    (min - span * AXIS_PADDING)..(max + span * AXIS_PADDING)
}

/// Draw the figure into a `width` x `height` RGB image.
pub fn render_scatter(
    style: &ScatterStyle,
    points: &[[f64; 2]],
    width: u32,
    height: u32,
) -> Result<RgbImage> {
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    let (x_span, y_span) = axis_spans(points);
    let [r, g, b, _] = style.point_color.to_array();
    let color = RGBColor(r, g, b);
    let radius = style.point_radius.round().max(1.0) as i32;

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&style.title, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(55)
            .build_cartesian_2d(x_span, y_span)
            .map_err(draw_err)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(style.x_label.as_str())
            .y_desc(style.y_label.as_str());
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(draw_err)?;

        chart
            .draw_series(
                points
                    .iter()
                    .filter(|[x, y]| x.is_finite() && y.is_finite())
                    .map(|&[x, y]| Circle::new((x, y), radius, color.filled())),
            )
            .map_err(draw_err)?
            .label(style.legend.as_str())
            .legend(move |(x, y)| Circle::new((x, y), radius, color.filled()));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| PlotterError::Display("frame buffer size mismatch".to_string()))
}

/// Headless display that keeps every rendered frame in memory.
#[derive(Debug, Default)]
pub struct SnapshotDisplay {
    frames: Vec<RgbImage>,
}

impl SnapshotDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RgbImage> {
        self.frames.last()
    }
}

impl Displayable for SnapshotDisplay {
    fn show(&mut self, style: &ScatterStyle, points: &[[f64; 2]]) -> Result<()> {
        let [w, h] = style.size;
        let frame = render_scatter(style, points, w as u32, h as u32)?;
        debug!(width = frame.width(), height = frame.height(), "snapshot rendered");
        self.frames.push(frame);
        Ok(())
    }
}
