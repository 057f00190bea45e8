use thiserror::Error;

use crate::global_constants::EXTRACTION_FAILED_MESSAGE;

/// Failures of one extraction round trip.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("OCR request failed: {0}")]
    Network(String),

    #[error("OCR service reported an error: {0}")]
    Api(String),

    #[error("OCR response was malformed: {0}")]
    MalformedResponse(String),
}

impl ExtractionError {
    /// Text shown in the error block. Service messages pass through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ExtractionError::Api(message) => message.clone(),
            ExtractionError::Network(_) | ExtractionError::MalformedResponse(_) => {
                EXTRACTION_FAILED_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_user_message_is_service_text() {
        let error = ExtractionError::Api("bad image".to_string());

        assert_eq!(error.user_message(), "bad image");
    }

    #[test]
    fn test_network_error_user_message_is_localized_fallback() {
        let error = ExtractionError::Network("connection refused".to_string());

        assert_eq!(error.user_message(), EXTRACTION_FAILED_MESSAGE);
    }

    #[test]
    fn test_malformed_response_user_message_is_localized_fallback() {
        let error = ExtractionError::MalformedResponse("missing ParsedResults".to_string());

        assert_eq!(error.user_message(), EXTRACTION_FAILED_MESSAGE);
    }

    #[test]
    fn test_error_display_includes_detail() {
        let error = ExtractionError::Network("dns failure".to_string());

        assert_eq!(format!("{}", error), "OCR request failed: dns failure");
    }
}
