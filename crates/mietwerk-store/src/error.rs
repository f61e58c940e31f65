use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The only variant that should become a user-facing 404.
    #[error("contract not found: {0}")]
    NotFound(String),

    #[error("invalid contract id: {0}")]
    InvalidId(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("blob endpoint returned {status}: {body}")]
    Server { status: u16, body: String },
}
