use thiserror::Error;

/// Core error type shared across lakeseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A sampling pool had no entities to draw from.
    #[error("empty pool: {0}")]
    EmptyPool(&'static str),
    /// A record did not match the shape of its table.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Convenience alias for results returned by lakeseed crates.
pub type Result<T> = std::result::Result<T, Error>;
