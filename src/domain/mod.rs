mod cell;
mod error;
mod grid;
pub mod patterns;
pub mod rules;

pub use cell::Cell;
pub use error::LifeError;
pub use grid::Grid;
pub use patterns::Pattern;
