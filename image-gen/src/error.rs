//! Error types for a single generation request

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Why one job produced no image. None of these stop the batch.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Request never got an HTTP response
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response parsed but carried no inline image
    #[error("No image data in response")]
    NoImageData { response: String },

    #[error("Invalid base64 image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerateError {
    /// Raw payload worth dumping alongside the error, if any
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            Self::NoImageData { response } => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_body() {
        let err = GenerateError::Status {
            status: 429,
            body: "{\"error\":\"quota\"}".into(),
        };
        assert_eq!(err.to_string(), "API returned 429: {\"error\":\"quota\"}");
        assert_eq!(err.payload(), Some("{\"error\":\"quota\"}"));
    }

    #[test]
    fn io_error_has_no_payload() {
        let err = GenerateError::from(std::io::Error::other("disk full"));
        assert!(err.payload().is_none());
    }
}
