use async_trait::async_trait;

use crate::adapters::ocr_space_request::{OcrSpaceConfig, OcrSpaceRequestBuilder};
use crate::adapters::ocr_space_response::OcrSpaceResponse;
use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{ExtractionError, SelectedImage};
use crate::global_constants::LOG_TAG_OCR_SPACE;

pub struct OcrSpaceOcrService {
    client: reqwest::Client,
    request_builder: OcrSpaceRequestBuilder,
}

impl OcrSpaceOcrService {
    pub fn build(config: OcrSpaceConfig) -> Self {
        log::info!("{} initializing with {:?}", LOG_TAG_OCR_SPACE, config);

        Self {
            client: reqwest::Client::new(),
            request_builder: OcrSpaceRequestBuilder::new(config),
        }
    }

    async fn post_request(&self, image: &SelectedImage) -> Result<String, ExtractionError> {
        let api_url = &self.request_builder.config().api_url;
        let form = self.request_builder.build_request(image).into_multipart_form();

        log::info!("{} posting {} to {}", LOG_TAG_OCR_SPACE, image.file_name, api_url);

        let response = self
            .client
            .post(api_url.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ExtractionError::Network(e.to_string()))?;

        log::debug!("{} response status: {}", LOG_TAG_OCR_SPACE, response.status());

        response
            .text()
            .await
            .map_err(|e| ExtractionError::Network(e.to_string()))
    }
}

#[async_trait]
impl OcrService for OcrSpaceOcrService {
    async fn extract_text_from_image(
        &self,
        image: &SelectedImage,
    ) -> Result<String, ExtractionError> {
        let body = self.post_request(image).await.map_err(|error| {
            log::error!("{} transport failure: {}", LOG_TAG_OCR_SPACE, error);
            error
        })?;

        log::debug!("{} response body: {}", LOG_TAG_OCR_SPACE, body);

        let extracted_text = OcrSpaceResponse::parse(&body)?.into_extracted_text()?;

        log::info!(
            "{} extraction complete, {} characters",
            LOG_TAG_OCR_SPACE,
            extracted_text.chars().count()
        );

        Ok(extracted_text)
    }
}
