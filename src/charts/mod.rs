//! Charts module - Scatter rendering and display surfaces

mod plotter;
mod renderer;
mod viewer;

pub use plotter::{Displayable, PlotRenderer, ScatterStyle, POINT_COLOR};
pub use renderer::{render_scatter, SnapshotDisplay};
pub use viewer::ScatterWindow;
