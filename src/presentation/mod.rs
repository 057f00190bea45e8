pub mod app_theme;
mod extraction_panel_view;

pub use extraction_panel_view::{render_extraction_panel, ExtractionPanelViewMessage};
