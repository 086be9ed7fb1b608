//! Plain-text extraction from uploaded documents.
//!
//! Only `txt` is decoded here; container formats such as PDF and DOCX are
//! reported as [`ExtractError::UnsupportedFormat`].

pub mod error;


pub use error::ExtractError;

use std::path::Path;

use tracing::debug;

use crate::constants::MAX_UPLOAD_BYTES;

/// Extensions accepted by [`extract_text`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt"];

/// Decodes an uploaded file into cleaned UTF-8 text.
///
/// `extension` may carry a leading dot and any case.
pub fn extract_text(bytes: &[u8], extension: &str) -> Result<String, ExtractError> {
    let extension = extension.trim_start_matches('.').to_ascii_lowercase();

    if bytes.is_empty() {
        return Err(ExtractError::Empty);
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ExtractError::TooLarge {
            size: bytes.len(),
            max: MAX_UPLOAD_BYTES,
        });
    }

    if !is_supported(&extension) {
        return Err(ExtractError::UnsupportedFormat { extension });
    }
    let raw = decode_text(bytes);

    let text = clean_text(&raw);
    if text.is_empty() {
        return Err(ExtractError::NoText { extension });
    }

    debug!(
        bytes = bytes.len(),
        chars = text.chars().count(),
        words = text.split_whitespace().count(),
        "Extracted text"
    );
    Ok(text)
}

/// Whether [`extract_text`] decodes files with this extension.
pub fn is_supported(extension: &str) -> bool {
    let extension = extension.trim_start_matches('.');
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(extension))
}

/// Lowercased extension of a file name, if it has one.
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Collapses whitespace runs and drops characters other than word
/// characters, whitespace and `.,!?-`.
pub fn clean_text(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace() || ".,!?-".contains(*c))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

// UTF-8 first; Latin-1 maps every byte to a char, so it always succeeds.
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
