use std::fmt;

/// Failures an encoding adapter can hit internally.
///
/// These never leave the adapter layer: the no-raise `encode` / `decode`
/// entry points on [`crate::serialization::Codec`] turn them into empty
/// results.
#[derive(Debug)]
pub enum CodecError {
    /// Turning a record into bytes failed
    SerializationError(String),
    /// Turning bytes back into a record failed
    DeserializationError(String),
    /// Compression stream failed
    IoError(std::io::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            CodecError::DeserializationError(msg) => write!(f, "Deserialization error: {msg}"),
            CodecError::IoError(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::IoError(err)
    }
}

impl From<rmp_serde::encode::Error> for CodecError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        CodecError::SerializationError(err.to_string())
    }
}

impl From<rmp_serde::decode::Error> for CodecError {
    fn from(err: rmp_serde::decode::Error) -> Self {
        CodecError::DeserializationError(err.to_string())
    }
}

impl From<prost::EncodeError> for CodecError {
    fn from(err: prost::EncodeError) -> Self {
        CodecError::SerializationError(err.to_string())
    }
}

impl From<prost::DecodeError> for CodecError {
    fn from(err: prost::DecodeError) -> Self {
        CodecError::DeserializationError(err.to_string())
    }
}

/// Result type alias for adapter internals
pub type CodecResult<T> = Result<T, CodecError>;
