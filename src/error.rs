use thiserror::Error;

#[derive(Error, Debug)]
pub enum BooklistError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Author {0} not found")]
    AuthorNotFound(i32),

    #[error("Invalid request: {0}")]
    Request(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BooklistError>;
