use std::path::PathBuf;

use async_trait::async_trait;

#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Asks the user for an image file. `None` when the dialog was dismissed.
    async fn pick_image(&self) -> Option<PathBuf>;
}
