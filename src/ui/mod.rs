mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_width, screen_height};

use crate::application::RunState;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const SPEED_SLIDER_Y: f32 = 250.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Session commands reachable from the control panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    Stop,
    Reset,
    Randomize,
}

/// Create UI buttons with standard layout.
/// Start and Stop enablement mirrors the run state.
pub fn create_buttons(run_state: RunState) -> Vec<(Control, Button)> {
    let px = panel_x();
    let running = run_state == RunState::Running;
    vec![
        (Control::Start, Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, "Start").with_enabled(!running)),
        (Control::Stop, Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Stop").with_enabled(running)),
        (Control::Reset, Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset")),
        (Control::Randomize, Button::new(px, 170.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random")),
    ]
}
