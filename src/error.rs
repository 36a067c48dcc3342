use serde_json::Error as JsonError;
use std::fmt;

#[derive(Debug)]
pub enum ForgeError {
    /// The repository lookup returned a non-success status.
    NotFoundError(String),
    /// A field name outside the fixed document fields was used.
    UnknownFieldError(String),
    /// A secondary endpoint answered with an unexpected shape.
    MalformedResponseError(String),
    NetworkError(String),
    ParseError(String),
    StorageError(String),
}

impl fmt::Display for ForgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFoundError(repo) => write!(f, "Repository not found: {}", repo),
            Self::UnknownFieldError(name) => write!(f, "Unknown field: {}", name),
            Self::MalformedResponseError(msg) => write!(f, "Malformed response: {}", msg),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Self::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ForgeError {}

impl From<JsonError> for ForgeError {
    fn from(error: JsonError) -> Self {
        ForgeError::ParseError(format!("JSON serialization error: {}", error))
    }
}

impl From<reqwest::Error> for ForgeError {
    fn from(error: reqwest::Error) -> Self {
        ForgeError::NetworkError(error.to_string())
    }
}

impl From<std::io::Error> for ForgeError {
    fn from(error: std::io::Error) -> Self {
        ForgeError::StorageError(error.to_string())
    }
}
