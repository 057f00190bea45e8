use async_trait::async_trait;

use crate::core::models::{ExtractionError, SelectedImage};

#[async_trait]
pub trait OcrService: Send + Sync {
    /// Runs one OCR round trip for `image` and returns the recognized text.
    async fn extract_text_from_image(&self, image: &SelectedImage)
        -> Result<String, ExtractionError>;
}
