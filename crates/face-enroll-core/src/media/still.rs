use crate::{CoreResult, EnrollError};

use std::panic::Location;

use error_location::ErrorLocation;
use image::{DynamicImage, codecs::jpeg::JpegEncoder};
use tracing::{debug, instrument};

/// Media type of every camera capture.
pub(crate) const STILL_MEDIA_TYPE: &str = "image/jpeg";

/// Encode a frozen frame as JPEG at its native resolution.
#[track_caller]
#[instrument(skip(frame), fields(width = frame.width(), height = frame.height()))]
pub(crate) fn encode_still(frame: &DynamicImage, quality: u8) -> CoreResult<Vec<u8>> {
    let mut buffer = Vec::new();

    let encoded = {
        let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
        match frame {
            DynamicImage::ImageLuma8(grey) => encoder.encode_image(grey),
            other => encoder.encode_image(&other.to_rgb8()),
        }
    };

    encoded.map_err(|e| EnrollError::CaptureFailed {
        reason: format!("Failed to encode still frame: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    debug!(bytes = buffer.len(), quality, "Still frame encoded");

    Ok(buffer)
}
