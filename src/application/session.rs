use log::{debug, info, trace, warn};
use rand::Rng;

use crate::config::LifeConfig;
use crate::domain::{Grid, LifeError, patterns, rules};
use super::Scheduler;

/// Whether generations are currently being advanced
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// The display-refresh driver that invokes `SessionController::tick`.
/// The session only ever asks it to begin or end driving.
pub trait FrameDriver {
    fn request_frames(&mut self);
    fn cancel_frames(&mut self);
}

/// SessionController owns the live grid and orchestrates the simulation.
/// Every input path (buttons, keyboard) goes through it, so there is a
/// single source of truth for the run state.
pub struct SessionController<D: FrameDriver> {
    grid: Grid,
    run_state: RunState,
    scheduler: Scheduler,
    generation: u64,
    random_density: f64,
    driver: D,
}

impl<D: FrameDriver> SessionController<D> {
    /// Create an idle session with an empty grid and the glider seeded at
    /// the configured origin
    pub fn new(rows: usize, cols: usize, config: &LifeConfig, driver: D) -> Result<Self, LifeError> {
        let mut grid = Grid::create(rows, cols)?;
        let scheduler = Scheduler::new(config.speed.default)?;

        let glider = patterns::glider();
        let (row, col) = config.glider_origin;
        if !glider.fits(&grid, row, col) {
            warn!("{} at ({}, {}) is clipped by a {}x{} grid", glider.name, row, col, rows, cols);
        }
        glider.place_on(&mut grid, row, col);

        info!("session created with a {}x{} grid", rows, cols);
        Ok(Self {
            grid,
            run_state: RunState::Idle,
            scheduler,
            generation: 0,
            random_density: config.random_density,
            driver,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn speed(&self) -> f64 {
        self.scheduler.speed()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Idle -> Running. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.scheduler.reset();
        self.run_state = RunState::Running;
        self.driver.request_frames();
        info!("simulation started at generation {}", self.generation);
        true
    }

    /// Running -> Idle. Returns false if already idle.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.run_state = RunState::Idle;
        self.driver.cancel_frames();
        info!("simulation stopped at generation {}", self.generation);
        true
    }

    /// Start when idle, stop when running
    pub fn toggle_running(&mut self) {
        match self.run_state {
            RunState::Idle => self.start(),
            RunState::Running => self.stop(),
        };
    }

    /// Stop and clear the grid
    pub fn reset(&mut self) {
        self.stop();
        self.grid = self.grid.empty_like();
        self.generation = 0;
        info!("grid reset");
    }

    /// Stop and fill the grid randomly
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Stop and fill the grid randomly from the given source
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        self.stop();
        let (rows, cols) = self.grid.dimensions();
        // Dimensions come from an existing grid, so creation cannot fail
        if let Ok(grid) = Grid::random(rows, cols, self.random_density, rng) {
            self.grid = grid;
        }
        self.generation = 0;
        info!("grid randomized: {} cells alive", self.grid.count_alive());
    }

    /// Flip one cell. Positions outside the grid are ignored.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.grid.toggle(row, col).is_none() {
            debug!("ignoring toggle outside the grid at ({}, {})", row, col);
        }
    }

    /// Change the generation rate. On error the previous rate is kept.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), LifeError> {
        self.scheduler.set_speed(speed)?;
        debug!("speed set to {} gen/s ({}ms)", speed, self.scheduler.interval_ms());
        Ok(())
    }

    /// Called once per display refresh. Returns true when a generation was
    /// applied.
    pub fn tick(&mut self, timestamp_ms: f64) -> bool {
        if !self.is_running() || !self.scheduler.should_advance(timestamp_ms) {
            return false;
        }

        // Computed in full before the swap
        let next = rules::next(&self.grid);
        self.grid = next;
        self.generation += 1;
        trace!("generation {}", self.generation);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct RecordingDriver {
        requests: u32,
        cancels: u32,
    }

    impl FrameDriver for RecordingDriver {
        fn request_frames(&mut self) {
            self.requests += 1;
        }

        fn cancel_frames(&mut self) {
            self.cancels += 1;
        }
    }

    fn session(rows: usize, cols: usize) -> SessionController<RecordingDriver> {
        SessionController::new(rows, cols, &LifeConfig::default(), RecordingDriver::default()).unwrap()
    }

    fn empty_session(rows: usize, cols: usize) -> SessionController<RecordingDriver> {
        let mut s = session(rows, cols);
        s.reset();
        s
    }

    #[test]
    fn test_new_is_idle_with_glider() {
        let s = session(40, 40);
        assert_eq!(s.run_state(), RunState::Idle);
        assert_eq!(s.generation(), 0);
        assert_eq!(s.grid().count_alive(), 5);
        assert_eq!(s.grid().get(10, 11), Some(Cell::Alive));
        assert_eq!(s.speed(), 1.0);
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        let result = SessionController::new(0, 10, &LifeConfig::default(), RecordingDriver::default());
        assert!(matches!(result, Err(LifeError::InvalidDimensions { rows: 0, cols: 10 })));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut s = session(20, 20);
        assert!(s.start());
        assert!(!s.start());
        assert_eq!(s.run_state(), RunState::Running);
        assert_eq!(s.driver().requests, 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut s = session(20, 20);
        s.start();
        assert!(s.stop());
        assert!(!s.stop());
        assert_eq!(s.run_state(), RunState::Idle);
        assert_eq!(s.driver().cancels, 1);
    }

    #[test]
    fn test_stop_when_idle_has_no_side_effects() {
        let mut s = session(20, 20);
        s.stop();
        assert_eq!(s.driver().cancels, 0);
    }

    #[test]
    fn test_toggle_running() {
        let mut s = session(20, 20);
        s.toggle_running();
        assert!(s.is_running());
        s.toggle_running();
        assert!(!s.is_running());
        assert_eq!((s.driver().requests, s.driver().cancels), (1, 1));
    }

    #[test]
    fn test_tick_while_idle_never_advances() {
        let mut s = session(20, 20);
        let before = s.grid().clone();
        for t in 0..20 {
            assert!(!s.tick(t as f64 * 1_000.0));
        }
        assert_eq!(s.grid(), &before);
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn test_tick_advances_on_interval() {
        let mut s = session(30, 30);
        s.set_speed(10.0).unwrap();
        s.start();

        assert!(!s.tick(0.0));
        assert!(!s.tick(50.0));
        assert!(s.tick(100.0));
        assert_eq!(s.generation(), 1);
        assert!(!s.tick(150.0));
        assert!(s.tick(350.0));
        assert_eq!(s.generation(), 2);
    }

    #[test]
    fn test_tick_applies_one_generation_per_callback() {
        let mut s = session(30, 30);
        s.set_speed(10.0).unwrap();
        s.start();
        s.tick(1_000.0);

        let expected = rules::next(s.grid());
        assert!(s.tick(1_350.0));
        assert_eq!(s.grid(), &expected);
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_stop_prevents_further_ticks() {
        let mut s = session(30, 30);
        s.set_speed(10.0).unwrap();
        s.start();
        s.tick(0.0);
        assert!(s.tick(100.0));

        s.stop();
        assert!(!s.tick(1_000.0));
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_restart_rebaselines() {
        let mut s = session(30, 30);
        s.set_speed(10.0).unwrap();
        s.start();
        s.tick(0.0);
        s.stop();

        s.start();
        // Long pause while stopped must not count as elapsed time
        assert!(!s.tick(60_000.0));
        assert!(s.tick(60_100.0));
    }

    #[test]
    fn test_glider_runs_through_session() {
        let mut s = session(40, 40);
        s.set_speed(10.0).unwrap();
        s.start();
        s.tick(0.0);
        for i in 1..=4 {
            assert!(s.tick(i as f64 * 100.0));
        }

        let mut expected = Grid::create(40, 40).unwrap();
        patterns::glider().place_on(&mut expected, 11, 11);
        assert_eq!(s.grid(), &expected);
    }

    #[test]
    fn test_reset_stops_and_clears() {
        let mut s = session(20, 20);
        s.start();
        s.reset();

        assert_eq!(s.run_state(), RunState::Idle);
        assert_eq!(s.grid().count_alive(), 0);
        assert_eq!(s.grid().dimensions(), (20, 20));
        assert_eq!(s.generation(), 0);
        assert_eq!(s.driver().cancels, 1);
    }

    #[test]
    fn test_randomize_stops_and_fills() {
        let mut s = empty_session(100, 100);
        s.start();
        s.randomize_with(&mut StdRng::seed_from_u64(42));

        assert_eq!(s.run_state(), RunState::Idle);
        let fraction = s.grid().count_alive() as f64 / 10_000.0;
        assert!((fraction - 0.3).abs() < 0.03, "fraction {}", fraction);
    }

    #[test]
    fn test_toggle_cell_keeps_run_state() {
        let mut s = empty_session(10, 10);
        s.start();
        s.toggle_cell(3, 4);
        assert_eq!(s.grid().get(3, 4), Some(Cell::Alive));
        assert!(s.is_running());

        s.toggle_cell(3, 4);
        assert_eq!(s.grid().get(3, 4), Some(Cell::Dead));
    }

    #[test]
    fn test_toggle_cell_out_of_bounds_is_noop() {
        let mut s = empty_session(10, 10);
        s.toggle_cell(10, 0);
        s.toggle_cell(0, 99);
        assert_eq!(s.grid().count_alive(), 0);
    }

    #[test]
    fn test_invalid_speed_keeps_previous() {
        let mut s = session(10, 10);
        s.set_speed(5.0).unwrap();
        assert_eq!(s.set_speed(-1.0), Err(LifeError::InvalidSpeed(-1.0)));
        assert_eq!(s.speed(), 5.0);
    }
}
