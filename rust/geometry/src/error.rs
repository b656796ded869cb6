use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building footprint geometry
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate ring: {0}")]
    DegenerateRing(String),

    #[error("Malformed polygon: {0}")]
    MalformedPolygon(String),
}
