//! Extract text from image files by handing them to an OCR engine.
//!
//! [`extractor::extract_text`] validates a path, decodes the image and returns whatever
//! the [`ocr::OcrEngine`] recognizes. [`batch::BatchRunner`] drives it over many paths
//! for the `imgtext` binary.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod ocr;

pub use error::{ImgTextError, Result};
pub use extractor::{decode_image, extract_text, ImageExtractor};
pub use ocr::{OcrEngine, OcrProvider};
