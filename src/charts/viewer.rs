//! Scatter Window
//! Interactive egui_plot window; `show` blocks until the user closes it.

use crate::charts::{Displayable, ScatterStyle};
use crate::error::{PlotterError, Result};
use egui::RichText;
use egui_plot::{Legend, Plot, PlotPoints, Points};
use tracing::info;

/// Production display: one native window per call.
#[derive(Debug, Default)]
pub struct ScatterWindow;

impl ScatterWindow {
    pub fn new() -> Self {
        Self
    }
}

fn native_options(style: &ScatterStyle) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(style.size)
            .with_min_inner_size([400.0, 300.0])
            .with_title(style.title.clone()),
        ..Default::default()
    }
}

impl Displayable for ScatterWindow {
    fn show(&mut self, style: &ScatterStyle, points: &[[f64; 2]]) -> Result<()> {
        let app = ScatterApp {
            style: style.clone(),
            points: points.to_vec(),
        };

        info!(points = points.len(), "opening plot window");
        eframe::run_native(
            &style.title,
            native_options(style),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| PlotterError::Display(e.to_string()))?;
        info!("plot window closed");

        Ok(())
    }
}

/// Single-panel app holding one figure.
struct ScatterApp {
    style: ScatterStyle,
    points: Vec<[f64; 2]>,
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&self.style.title).size(18.0).strong());
            });
            ui.add_space(6.0);

            Plot::new("scatter_plot")
                .legend(Legend::default())
                .x_axis_label(self.style.x_label.clone())
                .y_axis_label(self.style.y_label.clone())
                .show_grid(self.style.show_grid)
                .show(ui, |plot_ui| {
                    plot_ui.points(
                        Points::new(PlotPoints::from(self.points.clone()))
                            .radius(self.style.point_radius)
                            .color(self.style.point_color)
                            .name(&self.style.legend),
                    );
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_options_follow_style() {
        let style = ScatterStyle {
            title: "Residuals".to_string(),
            size: [640.0, 480.0],
            ..ScatterStyle::default()
        };

        let options = native_options(&style);
        assert_eq!(options.viewport.title.as_deref(), Some("Residuals"));
        assert_eq!(
            options.viewport.inner_size,
            Some(egui::vec2(640.0, 480.0))
        );
    }
}
