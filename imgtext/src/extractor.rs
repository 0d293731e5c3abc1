use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, ImageReader};

use crate::error::{ImgTextError, Result};
use crate::ocr::OcrEngine;

/// Decode the file at `image_path` into an in-memory image.
///
/// Every failure on the way (open, format sniffing, decoding) is reported as
/// [`ImgTextError::InvalidImage`] carrying the path and the decoder's message.
pub fn decode_image(image_path: &Path) -> Result<DynamicImage> {
    let invalid = |reason: String| ImgTextError::InvalidImage {
        path: image_path.display().to_string(),
        reason,
    };

    ImageReader::open(image_path)
        .map_err(|e| invalid(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| invalid(e.to_string()))?
        .decode()
        .map_err(|e| invalid(e.to_string()))
}

/// Extract text from the image at `image_path` using `engine`.
///
/// # Errors
/// * [`ImgTextError::NotFound`] if no regular file exists at the path; nothing is decoded.
/// * [`ImgTextError::InvalidImage`] if the file cannot be decoded as an image.
/// * Whatever the engine reports if recognition itself fails.
///
/// The engine's output is returned untouched, including an empty string.
pub fn extract_text(image_path: impl AsRef<Path>, engine: &dyn OcrEngine) -> Result<String> {
    let image_path = image_path.as_ref();
    if !image_path.is_file() {
        return Err(ImgTextError::NotFound(image_path.display().to_string()));
    }

    let image = decode_image(image_path)?;
    engine.recognize(&image)
}

/// Extractor bound to a single OCR engine for the lifetime of the process.
#[derive(Clone)]
pub struct ImageExtractor {
    engine: Arc<dyn OcrEngine>,
}

impl ImageExtractor {
    pub fn new(engine: Arc<dyn OcrEngine>) -> Self {
        Self { engine }
    }

    pub fn extract_text(&self, image_path: impl AsRef<Path>) -> Result<String> {
        extract_text(image_path, self.engine.as_ref())
    }

    pub fn engine(&self) -> &dyn OcrEngine {
        self.engine.as_ref()
    }
}
