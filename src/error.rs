//! Error types for the qwertype application

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the qwertype application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
