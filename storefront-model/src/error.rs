use std::fmt::{self, Display};

/// Errors produced by model constructors and codecs.
#[derive(Debug)]
pub enum ModelError {
    /// A base64 payload could not be decoded.
    Base64(base64::DecodeError),
    /// A data URI was structurally malformed.
    MalformedDataUri(String),
    /// A mime type outside the accepted logo formats.
    UnsupportedMime(String),
    /// A network tag outside the closed set of supported platforms.
    UnknownNetwork(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Base64(err) => write!(f, "invalid base64 payload: {err}"),
            ModelError::MalformedDataUri(msg) => {
                write!(f, "malformed data uri: {msg}")
            }
            ModelError::UnsupportedMime(mime) => {
                write!(f, "unsupported image type: {mime}")
            }
            ModelError::UnknownNetwork(tag) => {
                write!(f, "unknown social network: {tag}")
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Base64(err) => Some(err),
            ModelError::MalformedDataUri(_)
            | ModelError::UnsupportedMime(_)
            | ModelError::UnknownNetwork(_) => None,
        }
    }
}

impl From<base64::DecodeError> for ModelError {
    fn from(err: base64::DecodeError) -> Self {
        ModelError::Base64(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
