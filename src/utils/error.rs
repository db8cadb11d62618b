// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Why a single fetch attempt did not produce a document.
#[derive(Error, Debug)]
pub enum AttemptFailure {
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode), // Anything other than 200 OK

    #[error("{0}")]
    Network(#[from] reqwest::Error), // Transport errors, timeouts, body decoding
}

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to fetch HTML from {url} after {attempts} attempt(s): {last}")]
    Exhausted {
        url: String,
        attempts: u32,
        last: AttemptFailure,
    },
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Loading source failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Writing output failed: {0}")]
    Write(#[from] WriteError),
}
