use thiserror::Error;

/// Result type for texture generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when generator parameters violate structural preconditions.
/// These indicate a wrong constant at the call site, not bad data, so
/// callers are expected to propagate them rather than recover.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid heightfield side: {0}")]
    InvalidSide(String),

    #[error("Invalid unit size: {0}")]
    InvalidUnitSize(String),
}
