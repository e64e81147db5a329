use thiserror::Error;

/// Errors produced by the save codec.
///
/// Filesystem failures are not represented here; the directory pass
/// propagates them as `std::io::Error` with path context attached.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The opaque file's content is not valid base64.
    #[error("save data is not valid base64: {0}")]
    MalformedEncoding(#[from] base64::DecodeError),

    /// The cyclic XOR key is empty. Unreachable with the built-in key.
    #[error("XOR key must not be empty")]
    InvalidKey,
}
