use thiserror::Error;

#[derive(Error, Debug)]
pub enum StashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, StashError>;
