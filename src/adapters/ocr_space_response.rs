use serde::Deserialize;

use crate::core::models::ExtractionError;

/// `ErrorMessage` is a list on most failures, but OCR.space sends a bare string for some.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OcrSpaceErrorMessage {
    Many(Vec<String>),
    One(String),
}

impl OcrSpaceErrorMessage {
    fn first(&self) -> Option<&str> {
        match self {
            OcrSpaceErrorMessage::Many(messages) => messages.first().map(String::as_str),
            OcrSpaceErrorMessage::One(message) => Some(message.as_str()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OcrSpaceParsedResult {
    pub parsed_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OcrSpaceResponse {
    #[serde(default)]
    pub is_errored_on_processing: bool,
    #[serde(default)]
    pub error_message: Option<OcrSpaceErrorMessage>,
    #[serde(default)]
    pub parsed_results: Option<Vec<OcrSpaceParsedResult>>,
}

impl OcrSpaceResponse {
    pub fn parse(body: &str) -> Result<Self, ExtractionError> {
        serde_json::from_str(body).map_err(|e| {
            ExtractionError::MalformedResponse(format!("response body is not valid JSON: {}", e))
        })
    }

    pub fn into_extracted_text(self) -> Result<String, ExtractionError> {
        if self.is_errored_on_processing {
            let message = self
                .error_message
                .as_ref()
                .and_then(OcrSpaceErrorMessage::first)
                .unwrap_or_default()
                .to_string();
            return Err(ExtractionError::Api(message));
        }

        self.parsed_results
            .and_then(|results| results.into_iter().next())
            .and_then(|result| result.parsed_text)
            .ok_or_else(|| {
                ExtractionError::MalformedResponse(
                    "response has no ParsedResults[0].ParsedText".to_string(),
                )
            })
    }
}
