//! Unified error types for the derivation pipeline

use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Malformed hexadecimal or Base58 input: wrong length, bad character.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Private-key scalar outside [1, n-1] where n is the group order.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// Base58Check payload whose trailing 4 bytes do not match its double
    /// SHA-256 checksum.
    #[error("checksum mismatch in Base58Check data")]
    InvalidChecksum,

    /// Arithmetic reached a state that is impossible for validated inputs.
    #[error("internal computation error: {0}")]
    InternalComputation(String),
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidEncoding(e.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
