use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("file is not valid UTF-8 text: {0}")]
    InvalidEncoding(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
