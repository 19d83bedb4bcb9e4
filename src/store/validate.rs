use crate::config::MAX_TEXT_FILE_BYTES;

/// Check file content before it is served.
///
/// Returns a human-readable rejection reason, or `None` if the content is
/// acceptable: non-empty after trimming, and no larger than the download
/// limit when UTF-8 encoded.
pub fn validate_content(content: &str) -> Option<String> {
    if content.trim().is_empty() {
        return Some("File is empty".to_string());
    }
    if content.len() as u64 > MAX_TEXT_FILE_BYTES {
        return Some(format!(
            "File size exceeds maximum limit of {}MB",
            MAX_TEXT_FILE_BYTES / 1024 / 1024
        ));
    }
    None
}
