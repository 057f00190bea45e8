pub const APPLICATION_NAME: &str = "image-text-extractor";
pub const APPLICATION_TITLE: &str = "Image Text Extractor";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_PANEL: &str = "[PANEL]";
pub const LOG_TAG_INTAKE: &str = "[INTAKE]";
pub const LOG_TAG_OCR_SPACE: &str = "[OCR_SPACE]";
pub const LOG_TAG_PICKER: &str = "[PICKER]";

pub const MAIN_WINDOW_WIDTH: f32 = 700.0;
pub const MAIN_WINDOW_HEIGHT: f32 = 650.0;

pub const OCR_SPACE_API_URL: &str = "https://api.ocr.space/parse/image";
pub const OCR_API_KEY_ENV_VAR: &str = "OCR_API_KEY";
pub const DEFAULT_OCR_LANGUAGE: &str = "ara";

pub const FORM_FIELD_LANGUAGE: &str = "language";
pub const FORM_FIELD_IS_OVERLAY_REQUIRED: &str = "isOverlayRequired";
pub const FORM_FIELD_BASE64_IMAGE: &str = "base64Image";
pub const FORM_FIELD_API_KEY: &str = "apikey";

pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";
pub const IMAGE_FILE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const UI_TITLE: &str = "استخراج النصوص من الصورة";
pub const UI_PICK_IMAGE_LABEL: &str = "اختر صورة:";
pub const UI_PICK_IMAGE_BUTTON: &str = "اختيار ملف";
pub const UI_NO_FILE_SELECTED: &str = "لم يتم اختيار أي ملف";
pub const UI_EXTRACT_BUTTON: &str = "استخراج النص";
pub const UI_EXTRACT_BUTTON_LOADING: &str = "جاري استخراج النص ...";
pub const UI_EXTRACTED_TEXT_LABEL: &str = "النص المستخرج:";
pub const UI_COPY_TEXT_BUTTON: &str = "نسخ النص";
pub const UI_PICK_DIALOG_FILTER_NAME: &str = "Images";

pub const EXTRACTION_FAILED_MESSAGE: &str =
    "حدث خطأ أثناء استخراج النص. الرجاء المحاولة مرة أخرى.";
