use log::warn;
use macroquad::prelude::*;

use crate::application::{FrameDriver, SessionController};
use crate::config::SpeedRange;
use crate::ui::{Button, Control, Slider, grid_area_width};

/// Map a pixel position on the grid area to a (row, col) cell.
/// Returns `None` for positions outside the grid.
pub fn cell_at(pixel_x: f32, pixel_y: f32, cell_size: f32, rows: usize, cols: usize) -> Option<(usize, usize)> {
    if pixel_x < 0.0 || pixel_y < 0.0 {
        return None;
    }
    let row = (pixel_y / cell_size).floor() as usize;
    let col = (pixel_x / cell_size).floor() as usize;
    (row < rows && col < cols).then_some((row, col))
}

/// Toggle the cell under the pointer on a left click
pub fn handle_cell_click<D: FrameDriver>(
    session: &mut SessionController<D>,
    cell_size: f32,
    mouse_pos: (f32, f32),
) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= grid_area_width() {
        return;
    }

    let (rows, cols) = session.grid().dimensions();
    if let Some((row, col)) = cell_at(mouse_pos.0, mouse_pos.1, cell_size, rows, cols) {
        session.toggle_cell(row, col);
    }
}

/// Apply a new speed, keeping the slider in step with what the session
/// actually accepted
pub fn apply_speed<D: FrameDriver>(session: &mut SessionController<D>, slider: &mut Slider, speed: f64) {
    if let Err(err) = session.set_speed(speed) {
        warn!("{}", err);
    }
    slider.set_value(session.speed());
}

/// Process keyboard input
pub fn process_keyboard_input<D: FrameDriver>(
    session: &mut SessionController<D>,
    slider: &mut Slider,
    speed_range: &SpeedRange,
) {
    if is_key_pressed(KeyCode::Space) {
        session.toggle_running();
    }
    if is_key_pressed(KeyCode::C) {
        session.reset();
    }
    if is_key_pressed(KeyCode::R) {
        session.randomize();
    }
    if is_key_pressed(KeyCode::Up) {
        apply_speed(session, slider, speed_range.clamp(session.speed() + 1.0));
    }
    if is_key_pressed(KeyCode::Down) {
        apply_speed(session, slider, speed_range.clamp(session.speed() - 1.0));
    }
}

/// Dispatch control panel button clicks to the session
pub fn process_button_clicks<D: FrameDriver>(
    session: &mut SessionController<D>,
    buttons: &[(Control, Button)],
    mouse_pos: (f32, f32),
) {
    for (control, btn) in buttons {
        if !btn.is_clicked(mouse_pos) {
            continue;
        }
        match control {
            Control::Start => {
                session.start();
            }
            Control::Stop => {
                session.stop();
            }
            Control::Reset => session.reset(),
            Control::Randomize => session.randomize(),
        }
    }
}
