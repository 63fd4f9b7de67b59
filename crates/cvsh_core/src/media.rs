//! File import for the picture and resume slots.
//!
//! Files never leave the machine: an upload reads the bytes, sniffs
//! the MIME type from magic bytes and embeds the payload as a base64
//! data URI string inside the profile record. A file of the wrong type
//! for a slot is rejected and the previous value stays put.

use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use crate::error::{CvshError, CvshResult, ErrorKind, MediaErrorKind};

/// Which profile slot an upload targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    /// Profile picture: any recognized image type.
    Picture,
    /// Resume: PDF only.
    Resume,
}

impl MediaSlot {
    /// Human name used in transcript messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Picture => "image",
            Self::Resume => "PDF",
        }
    }

    fn accepts(&self, mime: &str) -> bool {
        match self {
            Self::Picture => mime.starts_with("image/"),
            Self::Resume => mime == "application/pdf",
        }
    }
}

/// Sniff a MIME type from leading magic bytes.
///
/// Recognizes the types the original site accepted: PNG, JPEG, GIF,
/// WebP and PDF. Anything else is `None`.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]) {
        Some("image/png")
    } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"%PDF-") {
        Some("application/pdf")
    } else {
        None
    }
}

/// Encode bytes as a `data:<mime>;base64,<payload>` URI.
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// Decode a data URI back into its raw bytes.
pub fn from_data_uri(uri: &str) -> CvshResult<Vec<u8>> {
    let payload = uri
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| {
            CvshError::new(
                ErrorKind::Media(MediaErrorKind::DecodeFailed),
                "not a base64 data URI",
            )
        })?;
    Ok(BASE64.decode(payload)?)
}

/// Read a file, check it against the slot's accepted types and return
/// it as a data URI.
pub fn import_file(slot: MediaSlot, path: &Path) -> CvshResult<String> {
    let bytes = fs::read(path).map_err(|e| {
        CvshError::new(ErrorKind::Media(MediaErrorKind::ReadFailed), e.to_string())
            .with_context("path", path.display().to_string())
    })?;

    let mime = sniff_mime(&bytes)
        .filter(|mime| slot.accepts(mime))
        .ok_or_else(|| CvshError::unsupported_media(slot.describe(), &path.display().to_string()))?;

    debug!(path = %path.display(), mime, size = bytes.len(), "imported media file");
    Ok(to_data_uri(mime, &bytes))
}
