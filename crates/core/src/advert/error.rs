use thiserror::Error;

/// Errors that can occur when validating or interpreting adverts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdvertError {
    #[error("Advert title cannot be empty")]
    EmptyTitle,
    #[error("Advert title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Advert price must be zero or between 1e-130 and 1e126")]
    InvalidPrice,
    #[error("Accepting an advert requires a file path")]
    MissingFilePath,
    #[error("Unknown advert status: {0}")]
    UnknownStatus(String),
}
