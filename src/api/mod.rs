mod chart_layout;
mod layout_config;

pub use chart_layout::{ChartLayout, LayoutSnapshot};
pub use layout_config::LayoutConfig;
