use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output file: {0}.")]
    CreateFailed(String),

    #[error("Failed to write output file: {0}.")]
    WriteFailed(String),
}
