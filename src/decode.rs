//! Decoding the request payload into a grayscale pixel grid

use crate::error::{PredictError, Result};
use anyhow::anyhow;
use base64::{engine::general_purpose, Engine as _};
use image::GrayImage;
use tracing::debug;

/// Strip a `data:<mediatype>;base64,` prefix. A `data:` URL without the
/// base64 marker, or a stray comma in a bare payload, is a decode error
/// rather than a silent truncation.
fn strip_data_url(payload: &str) -> Result<&str> {
    if let Some(rest) = payload.strip_prefix("data:") {
        match rest.split_once(',') {
            Some((header, body)) if header.ends_with(";base64") => Ok(body),
            _ => Err(PredictError::Decode(anyhow!("malformed data-URL prefix"))),
        }
    } else if payload.contains(',') {
        Err(PredictError::Decode(anyhow!(
            "unexpected comma in base64 payload"
        )))
    } else {
        Ok(payload)
    }
}

/// Decode a base64 (or data-URL) payload into an 8-bit grayscale image.
/// Embedded whitespace and newlines are tolerated.
pub fn decode_image(payload: &str) -> Result<GrayImage> {
    let body = strip_data_url(payload.trim())?;
    let cleaned: String = body.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = general_purpose::STANDARD.decode(cleaned.as_bytes())?;
    debug!("decoded {} bytes of image data", bytes.len());

    Ok(image::load_from_memory(&bytes)?.to_luma8())
}
