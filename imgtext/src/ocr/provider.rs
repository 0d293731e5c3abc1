use std::borrow::Cow;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use image::{DynamicImage, ImageFormat};
use leptess::LepTess;
use tracing::{debug, info, warn};

use super::OcrEngine;
use crate::config::OcrConfig;
use crate::error::{ImgTextError, Result};

enum OcrBackend {
    Local { tesseract: Arc<Mutex<LepTess>> },
    Unavailable { reason: String },
}

pub struct OcrProvider {
    backend: OcrBackend,
}

fn create_tesseract(config: &OcrConfig) -> std::result::Result<LepTess, String> {
    LepTess::new(config.data_path.as_deref(), &config.languages).map_err(|e| e.to_string())
}

/// Lossless in-memory PNG of the decoded image, the form leptess accepts.
fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    // PNG has no float sample formats
    let image = match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16()))
        }
        _ => Cow::Borrowed(image),
    };

    let mut output = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| ImgTextError::Ocr(format!("Failed to encode image: {e}")))?;
    Ok(output)
}

impl OcrProvider {
    /// Initialize the Tesseract engine.
    ///
    /// A missing Tesseract install or language pack does not fail construction: the
    /// provider degrades to an unavailable backend and every call reports the reason.
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let backend = match create_tesseract(config) {
            Ok(lt) => {
                info!(languages = %config.languages, "Tesseract OCR initialized");
                OcrBackend::Local {
                    tesseract: Arc::new(Mutex::new(lt)),
                }
            }
            Err(e) => {
                let reason = format!("Tesseract not available: {e}");
                warn!("{}", reason);
                OcrBackend::Unavailable { reason }
            }
        };

        Ok(Self { backend })
    }

    fn recognize_local(tesseract: &Mutex<LepTess>, image: &DynamicImage) -> Result<String> {
        let bytes = encode_png(image)?;

        let mut lt = tesseract
            .lock()
            .map_err(|e| ImgTextError::Ocr(format!("OCR engine lock poisoned: {e}")))?;
        lt.set_image_from_mem(&bytes)
            .map_err(|e| ImgTextError::Ocr(format!("Failed to set image: {e}")))?;
        let text = lt
            .get_utf8_text()
            .map_err(|e| ImgTextError::Ocr(format!("Failed to extract text: {e}")))?;

        debug!(
            width = image.width(),
            height = image.height(),
            chars = text.chars().count(),
            "Tesseract recognized text"
        );
        Ok(text)
    }
}

impl OcrEngine for OcrProvider {
    fn recognize(&self, image: &DynamicImage) -> Result<String> {
        match &self.backend {
            OcrBackend::Local { tesseract } => Self::recognize_local(tesseract, image),
            OcrBackend::Unavailable { reason } => {
                Err(ImgTextError::OcrUnavailable(reason.clone()))
            }
        }
    }

    fn is_available(&self) -> bool {
        !matches!(self.backend, OcrBackend::Unavailable { .. })
    }
}

impl Clone for OcrProvider {
    fn clone(&self) -> Self {
        match &self.backend {
            OcrBackend::Local { tesseract } => Self {
                backend: OcrBackend::Local {
                    tesseract: Arc::clone(tesseract),
                },
            },
            OcrBackend::Unavailable { reason } => Self {
                backend: OcrBackend::Unavailable {
                    reason: reason.clone(),
                },
            },
        }
    }
}
