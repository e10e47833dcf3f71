use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template engine setup failed: {0}.")]
    EngineSetup(String),

    #[error("Template '{template}' is not valid UTF-8: {message}.")]
    InvalidUtf8 { template: String, message: String },

    #[error("Failed to parse template '{template}': {message}")]
    ParseFailed { template: String, message: String },

    #[error("Failed to render template '{template}': {message}")]
    RenderFailed { template: String, message: String },
}
