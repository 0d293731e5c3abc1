#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{DynamicImage, ImageFormat};
use imgtext::{ImageExtractor, ImgTextError, OcrEngine, Result};
use tempfile::TempDir;

/// Engine that "recognizes" an image as its dimensions, so each fixture yields
/// distinct, predictable text.
pub struct DimensionsEngine;

impl OcrEngine for DimensionsEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<String> {
        Ok(format!("text of {}x{}", image.width(), image.height()))
    }
}

/// Engine that always returns the same string.
pub struct FixedEngine(pub &'static str);

impl OcrEngine for FixedEngine {
    fn recognize(&self, _image: &DynamicImage) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// Engine that fails on images of one width and succeeds on the rest.
pub struct FailsOnWidth(pub u32);

impl OcrEngine for FailsOnWidth {
    fn recognize(&self, image: &DynamicImage) -> Result<String> {
        if image.width() == self.0 {
            Err(ImgTextError::Ocr("recognition crashed".to_string()))
        } else {
            DimensionsEngine.recognize(image)
        }
    }
}

pub fn extractor(engine: impl OcrEngine + 'static) -> ImageExtractor {
    ImageExtractor::new(Arc::new(engine))
}

/// Write a blank PNG of the given size into `dir`.
pub fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    DynamicImage::new_rgb8(width, height)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap_or_else(|e| panic!("Failed to write fixture '{name}': {e}"));
    path
}

/// Write a file that claims to be an image but holds plain text.
pub fn write_fake_image(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, b"not an image").expect("Failed to write fake image");
    path
}

pub fn missing_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

pub fn display(path: &Path) -> String {
    path.display().to_string()
}
