//! Errors reported when building a [`Grid`](crate::grid::Grid).

use thiserror::Error;

/// Invalid construction parameters. Nothing is allocated before these are
/// detected, so the caller can retry with corrected options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HogError {
    /// Cell width or height was zero.
    #[error("cell dimensions must be positive (found {width}x{height})")]
    InvalidCellDimensions {
        /// Requested cell width in pixels.
        width: u32,
        /// Requested cell height in pixels.
        height: u32,
    },
    /// The histogram had no orientation bins.
    #[error("number of orientation bins must be positive")]
    InvalidBinCount,
}
