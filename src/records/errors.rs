use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Unsupported source format: {0}.")]
    UnsupportedFormat(String),

    #[error("Failed to decode flag types from '{path}': {message}.")]
    DecodeFailed { path: String, message: String },
}
