use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrbError {
    #[error("Network error: {0}")]
    Network(Box<reqwest::Error>),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Index {index} out of range for saved log of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("OrbError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for OrbError {
    fn from(error: reqwest::Error) -> Self {
        OrbError::Network(Box::new(error))
    }
}

impl From<rusqlite::Error> for OrbError {
    fn from(error: rusqlite::Error) -> Self {
        OrbError::Persistence(error.to_string())
    }
}

impl From<std::io::Error> for OrbError {
    fn from(error: std::io::Error) -> Self {
        OrbError::Persistence(error.to_string())
    }
}

impl From<serde_json::Error> for OrbError {
    fn from(error: serde_json::Error) -> Self {
        OrbError::Persistence(error.to_string())
    }
}
