use thiserror::Error;

/// Failures raised by the driver layer during parameter binding or column
/// extraction. Not translated here - callers own the mapping into their
/// persistence exception hierarchy.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Parameter index {0} is out of range (indexes are 1-based)")]
    ParameterOutOfRange(usize),

    #[error("No such column: {0}")]
    NoSuchColumn(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("I/O failure while draining character stream: {0}")]
    Io(#[from] std::io::Error),
}
