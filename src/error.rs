use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    #[error("Could not parse API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
}
