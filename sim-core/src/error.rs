use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the simulation core.
///
/// Only construction can fail: stepping, motion and contact logic are total
/// over well-formed cells.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A construction argument or configuration value is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
