use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset directory not found: {0}.")]
    MissingDirectory(String),

    #[error("Failed to walk asset directory: {0}.")]
    WalkFailed(String),

    #[error("Failed to read asset: {0}.")]
    ReadFailed(String),

    #[error("Asset not found: {0}.")]
    NotFound(String),
}
