use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::models::data_url;
use crate::global_constants::{FALLBACK_MIME_TYPE, LOG_TAG_INTAKE};

#[derive(Clone)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}

impl SelectedImage {
    pub fn build_from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime_type = Self::detect_mime_type(&bytes);
        let file_name = file_name.into();

        log::debug!(
            "{} building selected image {} ({}, {} bytes)",
            LOG_TAG_INTAKE,
            file_name,
            mime_type,
            bytes.len()
        );

        Self {
            file_name,
            mime_type,
            bytes: Arc::new(bytes),
        }
    }

    pub async fn load_from_path(path: &Path) -> Result<Self> {
        log::info!("{} reading image file {:?}", LOG_TAG_INTAKE, path);

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image file {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::build_from_bytes(file_name, bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_data_url(&self) -> String {
        data_url::encode_data_url(&self.mime_type, &self.bytes)
    }

    fn detect_mime_type(bytes: &[u8]) -> String {
        image::guess_format(bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or(FALLBACK_MIME_TYPE)
            .to_string()
    }
}
