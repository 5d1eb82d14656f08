use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the parser: file I/O, config loading and rendering.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config file at {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Typst compilation failed: {0}")]
    Compile(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF output needs an output path when reading from stdin")]
    MissingOutput,
}
