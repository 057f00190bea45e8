use crate::core::models::SelectedImage;
use crate::global_constants::{
    DEFAULT_OCR_LANGUAGE, FORM_FIELD_API_KEY, FORM_FIELD_BASE64_IMAGE,
    FORM_FIELD_IS_OVERLAY_REQUIRED, FORM_FIELD_LANGUAGE, LOG_TAG_OCR_SPACE, OCR_SPACE_API_URL,
};
use crate::user_settings::UserSettings;

#[derive(Clone, PartialEq)]
pub struct OcrSpaceConfig {
    pub api_url: String,
    pub api_key: String,
    pub language: String,
    pub is_overlay_required: bool,
}

impl std::fmt::Debug for OcrSpaceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrSpaceConfig")
            .field("api_url", &self.api_url)
            .field("api_key_present", &!self.api_key.is_empty())
            .field("language", &self.language)
            .field("is_overlay_required", &self.is_overlay_required)
            .finish()
    }
}

impl Default for OcrSpaceConfig {
    fn default() -> Self {
        Self {
            api_url: OCR_SPACE_API_URL.to_string(),
            api_key: String::new(),
            language: DEFAULT_OCR_LANGUAGE.to_string(),
            is_overlay_required: false,
        }
    }
}

impl OcrSpaceConfig {
    /// Builds the config from the settings file, letting `env_api_key` take precedence
    /// over the key stored in settings.
    pub fn resolve(settings: &UserSettings, env_api_key: Option<String>) -> Self {
        let api_key = env_api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| settings.api_key.clone().filter(|key| !key.trim().is_empty()));

        let api_key = match api_key {
            Some(key) => key,
            None => {
                log::warn!(
                    "{} no API key configured, OCR requests will be rejected by the service",
                    LOG_TAG_OCR_SPACE
                );
                String::new()
            }
        };

        Self {
            api_url: settings.ocr_api_url.clone(),
            api_key,
            language: settings.ocr_language.clone(),
            is_overlay_required: false,
        }
    }
}

/// Form fields of one OCR.space request, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrSpaceRequest {
    fields: Vec<(&'static str, String)>,
}

impl OcrSpaceRequest {
    #[allow(dead_code)]
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    #[allow(dead_code)]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields()
            .iter()
            .find(|(field_name, _)| *field_name == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn into_multipart_form(self) -> reqwest::multipart::Form {
        self.fields
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            })
    }
}

pub struct OcrSpaceRequestBuilder {
    config: OcrSpaceConfig,
}

impl OcrSpaceRequestBuilder {
    pub fn new(config: OcrSpaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OcrSpaceConfig {
        &self.config
    }

    /// Encodes `image` on its own, independent of any preview already derived from it.
    pub fn build_request(&self, image: &SelectedImage) -> OcrSpaceRequest {
        let base64_image = image.to_data_url();

        log::debug!(
            "{} built request for {} ({} encoded characters, language={})",
            LOG_TAG_OCR_SPACE,
            image.file_name,
            base64_image.len(),
            self.config.language
        );

        OcrSpaceRequest {
            fields: vec![
                (FORM_FIELD_LANGUAGE, self.config.language.clone()),
                (
                    FORM_FIELD_IS_OVERLAY_REQUIRED,
                    self.config.is_overlay_required.to_string(),
                ),
                (FORM_FIELD_BASE64_IMAGE, base64_image),
                (FORM_FIELD_API_KEY, self.config.api_key.clone()),
            ],
        }
    }
}
