// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The cache store could not be reached or refused the operation.
    #[error("cache store: {0}")]
    Store(String),
    /// A stored response snapshot could not be decoded. Treated as an
    /// anomaly rather than a miss.
    #[error("corrupt cache entry: {0}")]
    CorruptEntry(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
