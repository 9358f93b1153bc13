use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AirmapError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("TUI error: {0}")]
    Tui(#[from] TuiError),

    #[error("Page serialization failed: {0}")]
    Page(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Station dataset errors
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Station #{index} is invalid: {reason}")]
    InvalidStation { index: usize, reason: String },

    #[error("Dataset contains no stations")]
    Empty,
}

/// Render pass errors
#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("Map host closed before it became ready")]
    HostClosed,
}

/// TUI errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal initialization failed")]
    InitFailed,
}

/// Result type alias for airmap operations
pub type Result<T> = std::result::Result<T, AirmapError>;
