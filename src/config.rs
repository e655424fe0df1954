//! Startup configuration: cell size, speed range and seeding.

use crate::domain::LifeError;

/// Speed slider range in generations per second
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl SpeedRange {
    /// Clamp a requested speed into the slider range
    pub fn clamp(&self, speed: f64) -> f64 {
        speed.clamp(self.min, self.max)
    }
}

impl Default for SpeedRange {
    fn default() -> Self {
        // 1 gen/s gives the 1000ms default interval
        Self { min: 1.0, max: 10.0, default: 1.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    /// Side length of one cell in screen pixels
    pub cell_size: f32,
    pub speed: SpeedRange,
    /// Probability of a cell being alive after randomize
    pub random_density: f64,
    /// Top-left (row, col) of the glider seeded at startup
    pub glider_origin: (usize, usize),
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            speed: SpeedRange::default(),
            random_density: 0.3,
            glider_origin: (10, 10),
        }
    }
}

impl LifeConfig {
    /// Grid (rows, cols) that fit in a viewport of the given pixel size.
    /// Computed once at startup.
    pub fn grid_dimensions(&self, width: f32, height: f32) -> Result<(usize, usize), LifeError> {
        let rows = (height / self.cell_size).floor().max(0.0) as usize;
        let cols = (width / self.cell_size).floor().max(0.0) as usize;
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        Ok((rows, cols))
    }
}
