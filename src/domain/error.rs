use thiserror::Error;

/// Errors raised by the simulation core.
///
/// Out-of-bounds cell access is not represented here: the grid treats it as
/// a no-op and the input layer bounds-checks before calling in.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LifeError {
    /// Grid creation with a zero row or column count
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Speed must be a finite, positive number of generations per second
    #[error("invalid speed {0}: must be a finite value greater than zero")]
    InvalidSpeed(f64),
}
