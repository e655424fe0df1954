// Domain layer - grid model and generation rules
pub mod domain;

// Application layer - scheduling and session orchestration
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeError, Pattern};
pub use application::{FrameDriver, RunState, Scheduler, SessionController};
pub use config::LifeConfig;
