//! Image reliability signal based on resolution

use image::ImageReader;
use std::io::Cursor;

use crate::error::{NewsError, Result};

const MIN_DIMENSION: u32 = 300;

const NO_IMAGE: f64 = 0.5;
const LOW_RESOLUTION: f64 = 0.3;
const ADEQUATE_RESOLUTION: f64 = 0.7;

/// Score an uploaded image by pixel dimensions.
///
/// Only the image header is decoded. Unreadable data is reported as
/// [`NewsError::InvalidImage`] rather than treated as absent.
pub fn image_score(image: Option<&[u8]>) -> Result<f64> {
    let bytes = match image {
        Some(b) => b,
        None => return Ok(NO_IMAGE),
    };

    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| NewsError::InvalidImage(e.to_string()))?
        .into_dimensions()
        .map_err(|e| NewsError::InvalidImage(e.to_string()))?;

    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        Ok(LOW_RESOLUTION)
    } else {
        Ok(ADEQUATE_RESOLUTION)
    }
}
