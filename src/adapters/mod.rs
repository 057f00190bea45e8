mod ocr_space_ocr_service;
mod ocr_space_request;
mod ocr_space_response;

pub use ocr_space_ocr_service::OcrSpaceOcrService;
pub use ocr_space_request::OcrSpaceConfig;
