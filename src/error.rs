//! Errors of the debug output in [`crate::vpython`]. The warps themselves never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Writing the script failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The color is not one of the predefined VPython colors
    #[error("unknown VPython color: {0:?}")]
    UnknownColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
