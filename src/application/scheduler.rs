use crate::domain::LifeError;

/// Scheduler paces generations against wall-clock time.
///
/// It is polled once per display refresh and never blocks. At most one
/// generation is granted per poll, however long the gap since the last one.
#[derive(Clone, Debug, PartialEq)]
pub struct Scheduler {
    speed: f64,
    interval_ms: f64,
    /// Timestamp of the last granted generation, or of the baseline poll
    last_update_ms: Option<f64>,
}

impl Scheduler {
    /// Create a scheduler running at `speed` generations per second
    pub fn new(speed: f64) -> Result<Self, LifeError> {
        let interval_ms = Self::interval_for(speed)?;
        Ok(Self {
            speed,
            interval_ms,
            last_update_ms: None,
        })
    }

    fn interval_for(speed: f64) -> Result<f64, LifeError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(LifeError::InvalidSpeed(speed));
        }
        Ok(1000.0 / speed)
    }

    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Milliseconds between generations
    pub const fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub const fn last_update_ms(&self) -> Option<f64> {
        self.last_update_ms
    }

    /// Change the speed. On error the previous interval is kept.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), LifeError> {
        self.interval_ms = Self::interval_for(speed)?;
        self.speed = speed;
        Ok(())
    }

    /// Forget the reference timestamp so the next poll becomes the baseline
    pub fn reset(&mut self) {
        self.last_update_ms = None;
    }

    /// Decide whether a generation is due at `timestamp_ms`.
    ///
    /// The reference moves to `timestamp_ms` only when a generation is
    /// granted (or on the baseline poll); skipped polls leave it untouched.
    pub fn should_advance(&mut self, timestamp_ms: f64) -> bool {
        let Some(last) = self.last_update_ms else {
            self.last_update_ms = Some(timestamp_ms);
            return false;
        };

        if timestamp_ms - last >= self.interval_ms {
            self.last_update_ms = Some(timestamp_ms);
            true
        } else {
            false
        }
    }
}
