use base64::Engine;

const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Encodes raw bytes as `data:<mime>;base64,<payload>`.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("{}{}{},{}", DATA_URL_SCHEME, mime_type, BASE64_MARKER, payload)
}

pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    let (header, payload) = data_url.split_once(',')?;
    if !header.starts_with(DATA_URL_SCHEME) || !header.ends_with(BASE64_MARKER) {
        return None;
    }
    Some(payload)
}

#[allow(dead_code)]
pub fn extract_mime_type_from_data_url(data_url: &str) -> Option<&str> {
    let (header, _) = data_url.split_once(',')?;
    header
        .strip_prefix(DATA_URL_SCHEME)?
        .strip_suffix(BASE64_MARKER)
}

#[allow(dead_code)]
pub fn decode_data_url_payload(data_url: &str) -> Option<Vec<u8>> {
    let payload = extract_base64_from_data_url(data_url)?;
    base64::engine::general_purpose::STANDARD.decode(payload).ok()
}
