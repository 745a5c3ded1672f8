use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The vectors of an initial condition must all describe the same system.
    #[error("Vector length mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
