use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset parse error: {0}")]
    Parse(String),

    #[error("dataset configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DataResult<T> = Result<T, DataError>;
