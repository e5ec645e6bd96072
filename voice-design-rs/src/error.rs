use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ELEVENLABS_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("request to voice design service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("voice design service returned {status}: {body}")]
    Api { status: u16, body: String },

    /// `index` is the zero-based position of the preview in the response,
    /// the message counts from 1 like the file names do.
    #[error("preview {} carries malformed base64 audio: {source}", .index + 1)]
    Decode {
        index: usize,
        #[source]
        source: base64::DecodeError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to report saved preview: {0}")]
    Output(#[source] std::io::Error),
}
