pub mod data_url;
mod extraction_error;
mod extraction_panel_state;
mod image_preview;
mod selected_image;

pub use extraction_error::ExtractionError;
pub use extraction_panel_state::{ExtractionOutcome, ExtractionPanelState, ExtractionTicket};
pub use image_preview::ImagePreview;
pub use selected_image::SelectedImage;
