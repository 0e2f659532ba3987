use std::io;

use thiserror::Error;

/// Custom error type for the noto-cjk-builder application
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Font parsing, editing or assembly errors
    #[error("Font error: {0}")]
    Font(String),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// External collection-merge tool errors
    #[error("Collection tool error: {0}")]
    Tool(String),
}

/// Result type alias for noto-cjk-builder operations
pub type Result<T> = std::result::Result<T, Error>;
