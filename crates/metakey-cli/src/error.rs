//! Error types for the metakey CLI.

use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Strict packing rejected a code
    #[error("cannot pack {code:?}: {source}")]
    Codec {
        code: String,
        #[source]
        source: metakey_core::CodecError,
    },
}

/// Result type alias using the CLI Error.
pub type Result<T> = std::result::Result<T, Error>;
