use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgTextError {
    #[error("Image file not found: {0}")]
    NotFound(String),

    #[error("Could not open image file '{path}': {reason}")]
    InvalidImage { path: String, reason: String },

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImgTextError {
    /// Whether the error belongs to the image itself rather than the OCR engine.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ImgTextError::NotFound(_) | ImgTextError::InvalidImage { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ImgTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_quotes_path() {
        let err = ImgTextError::NotFound("/tmp/missing.png".to_string());
        assert_eq!(err.to_string(), "Image file not found: /tmp/missing.png");
    }

    #[test]
    fn test_invalid_image_message_wraps_reason() {
        let err = ImgTextError::InvalidImage {
            path: "scan.png".to_string(),
            reason: "Format error decoding Png".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not open image file 'scan.png': Format error decoding Png"
        );
    }

    #[test]
    fn test_input_error_classification() {
        assert!(ImgTextError::NotFound("a".to_string()).is_input_error());
        assert!(ImgTextError::InvalidImage {
            path: "a".to_string(),
            reason: "b".to_string(),
        }
        .is_input_error());
        assert!(!ImgTextError::Ocr("boom".to_string()).is_input_error());
        assert!(!ImgTextError::OcrUnavailable("missing".to_string()).is_input_error());
    }
}
