//! Charts module - scatter chart data and rendering

mod plotter;
mod renderer;
mod scatter;

pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
pub use scatter::{ScatterChart, ScatterPoint};
