//! Chart Plotter Module
//! Validates a sample table and hands its points to a display surface.

use crate::data::extract_points;
use crate::error::Result;
use egui::Color32;
use polars::prelude::DataFrame;
use tracing::info;

pub const POINT_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue

/// Anything that can present a scatter figure.
///
/// Window-backed implementations block until the user dismisses the
/// figure; headless ones return as soon as the points are captured.
pub trait Displayable {
    fn show(&mut self, style: &ScatterStyle, points: &[[f64; 2]]) -> Result<()>;
}

/// Labels and appearance of the scatter figure
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: String,
    pub show_grid: bool,
    pub point_color: Color32,
    pub point_radius: f32,
    /// Window / image size in logical pixels
    pub size: [f32; 2],
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            title: "Scatter Plot of Data Points".to_string(),
            x_label: "X values".to_string(),
            y_label: "Y values".to_string(),
            legend: "Data Points".to_string(),
            show_grid: true,
            point_color: POINT_COLOR,
            point_radius: 3.0,
            size: [1000.0, 600.0],
        }
    }
}

/// Renders Sample Tables as scatter plots.
#[derive(Debug, Clone, Default)]
pub struct PlotRenderer {
    style: ScatterStyle,
}

impl PlotRenderer {
    pub fn new(style: ScatterStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ScatterStyle {
        &self.style
    }

    /// Validate `df` and show one point per row on `display`.
    pub fn render<D: Displayable + ?Sized>(&self, df: &DataFrame, display: &mut D) -> Result<()> {
        let points = extract_points(df)?;
        info!(points = points.len(), "rendering scatter plot");
        display.show(&self.style, &points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(ScatterStyle, Vec<[f64; 2]>)>,
    }

    impl Displayable for Recorder {
        fn show(&mut self, style: &ScatterStyle, points: &[[f64; 2]]) -> Result<()> {
            self.calls.push((style.clone(), points.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn test_default_style_labels() {
        let style = ScatterStyle::default();
        assert_eq!(style.x_label, "X values");
        assert_eq!(style.y_label, "Y values");
        assert_eq!(style.legend, "Data Points");
        assert!(style.show_grid);
    }

    #[test]
    fn test_render_passes_every_point() {
        let df = df! {
            "x" => [0.5, 1.5, 2.5],
            "y" => [3.0, 2.0, 1.0],
        }
        .unwrap();

        let mut recorder = Recorder::default();
        PlotRenderer::default().render(&df, &mut recorder).unwrap();

        assert_eq!(recorder.calls.len(), 1);
        let (style, points) = &recorder.calls[0];
        assert_eq!(style, &ScatterStyle::default());
        assert_eq!(points, &vec![[0.5, 3.0], [1.5, 2.0], [2.5, 1.0]]);
    }

    #[test]
    fn test_render_rejects_table_with_only_x() {
        let df = df! { "x" => [1.0, 2.0] }.unwrap();

        let mut recorder = Recorder::default();
        let err = PlotRenderer::default().render(&df, &mut recorder).unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_render_works_through_trait_object() {
        let df = df! { "x" => [1.0], "y" => [1.0] }.unwrap();
        let mut recorder = Recorder::default();
        let display: &mut dyn Displayable = &mut recorder;

        PlotRenderer::default().render(&df, display).unwrap();
        assert_eq!(recorder.calls.len(), 1);
    }
}
