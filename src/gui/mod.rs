//! GUI module - interactive chart viewer

mod app;
mod chart_viewer;
mod control_panel;

pub use app::TrendsApp;
pub use chart_viewer::{ChartViewer, ChartViewerAction};
pub use control_panel::{ControlPanel, ControlPanelAction};
