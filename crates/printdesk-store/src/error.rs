use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown settings category: {0}")]
    UnknownCategory(String),
}
