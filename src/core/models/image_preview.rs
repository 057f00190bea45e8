use iced::widget::image;

use crate::core::models::SelectedImage;

/// Preview of a [`SelectedImage`]. Only obtainable through [`ImagePreview::derive_from`],
/// so a preview always corresponds to some selected image.
#[derive(Clone)]
pub struct ImagePreview {
    data_url: String,
    pub image_handle: image::Handle,
}

impl std::fmt::Debug for ImagePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePreview")
            .field("data_url_length", &self.data_url.len())
            .finish()
    }
}

impl ImagePreview {
    pub fn derive_from(selected_image: &SelectedImage) -> Self {
        Self {
            data_url: selected_image.to_data_url(),
            image_handle: image::Handle::from_bytes(selected_image.bytes().to_vec()),
        }
    }

    #[allow(dead_code)]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}
