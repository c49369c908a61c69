//! Типи помилок спільної бібліотеки

use thiserror::Error;

/// Спільний тип помилки
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Псевдонім Result
pub type Result<T> = std::result::Result<T, Error>;
