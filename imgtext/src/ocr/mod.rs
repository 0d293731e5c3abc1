//! OCR (Optical Character Recognition) Module
//!
//! The extractor never talks to Tesseract directly. It hands decoded images to an
//! [`OcrEngine`], which keeps the engine swappable in tests and lets the binary
//! initialize Tesseract exactly once per process.
//!
//! # Architecture
//!
//! - `OcrEngine` trait defines the interface
//! - `OcrProvider` implements it with a local Tesseract engine via leptess
//!
//! # Configuration
//!
//! Engine settings come from `OcrConfig` (see `config.rs`):
//! - `languages`: Tesseract language string (`OCR_LANGUAGES`)
//! - `data_path`: tessdata directory (`OCR_DATA_PATH`)
//!
//! # Usage
//!
//! ```rust,ignore
//! let ocr = OcrProvider::new(&config.ocr)?;
//! let text = ocr.recognize(&image)?;
//! ```

mod provider;

pub use provider::OcrProvider;

use image::DynamicImage;

use crate::error::Result;

/// Anything that can turn a decoded image into text.
///
/// Implementations return the recognized text exactly as the engine produced it.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &DynamicImage) -> Result<String>;

    fn is_available(&self) -> bool {
        true
    }
}
