use std::path::PathBuf;

use async_trait::async_trait;

use crate::core::interfaces::ports::ImagePicker;
use crate::global_constants::{IMAGE_FILE_EXTENSIONS, LOG_TAG_PICKER, UI_PICK_DIALOG_FILTER_NAME};

pub struct RfdImagePicker;

impl RfdImagePicker {
    pub fn initialize() -> Self {
        log::debug!("{} initializing native file dialog picker", LOG_TAG_PICKER);
        Self
    }
}

#[async_trait]
impl ImagePicker for RfdImagePicker {
    async fn pick_image(&self) -> Option<PathBuf> {
        log::debug!("{} opening image file dialog", LOG_TAG_PICKER);

        let picked_file = rfd::AsyncFileDialog::new()
            .add_filter(UI_PICK_DIALOG_FILTER_NAME, IMAGE_FILE_EXTENSIONS)
            .pick_file()
            .await;

        match picked_file {
            Some(file_handle) => {
                let path = file_handle.path().to_path_buf();
                log::info!("{} picked {:?}", LOG_TAG_PICKER, path);
                Some(path)
            }
            None => {
                log::info!("{} dialog dismissed without a selection", LOG_TAG_PICKER);
                None
            }
        }
    }
}
