use macroquad::prelude::*;

use crate::application::{FrameDriver, SessionController};
use crate::domain::Grid;
use crate::ui::{Button, Control, Slider, PANEL_WIDTH, SPEED_SLIDER_Y, grid_area_height, grid_area_width, panel_x};

/// Draw alive cells and the cell grid lines
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    let (rows, cols) = grid.dimensions();
    let width = (cols as f32 * cell_size).min(grid_area_width());
    let height = (rows as f32 * cell_size).min(grid_area_height());

    // Colors
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let grid_line_color = Color::from_rgba(40, 40, 40, 255); // Dark gray

    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(row, col, _)| {
            draw_rectangle(
                col as f32 * cell_size,
                row as f32 * cell_size,
                cell_size,
                cell_size,
                alive_color,
            );
        });

    for row in 0..=rows {
        let y = row as f32 * cell_size;
        draw_line(0.0, y, width, y, 1.0, grid_line_color);
    }
    for col in 0..=cols {
        let x = col as f32 * cell_size;
        draw_line(x, 0.0, x, height, 1.0, grid_line_color);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the control panel with buttons, speed slider and status
pub fn draw_controls<D: FrameDriver>(
    session: &SessionController<D>,
    buttons: &[(Control, Button)],
    slider: &Slider,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));
    slider.draw(mouse_pos);

    let px = panel_x();
    let (rows, cols) = session.grid().dimensions();
    let interval_ms = 1000.0 / session.speed();

    let labels = [
        (format!("{:.0} gen/s ({:.0}ms)", session.speed(), interval_ms), SPEED_SLIDER_Y + 25.0, 14.0, LIGHTGRAY),
        ("Controls:".to_string(), 320.0, 14.0, WHITE),
        ("LMB: Toggle cell".to_string(), 335.0, 12.0, GRAY),
        ("Space: Start/Stop".to_string(), 348.0, 12.0, GRAY),
        ("C: Reset  R: Random".to_string(), 361.0, 12.0, GRAY),
        ("Up/Down: Speed".to_string(), 374.0, 12.0, GRAY),
        (format!("Grid: {}x{}", cols, rows), 405.0, 12.0, GRAY),
        ("Generation:".to_string(), 440.0, 16.0, WHITE),
        (session.generation().to_string(), 460.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Population:".to_string(), 490.0, 16.0, WHITE),
        (session.grid().count_alive().to_string(), 510.0, 16.0, LIGHTGRAY),
        ("Status:".to_string(), 540.0, 16.0, WHITE),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let (status, status_color) = if session.is_running() {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Stopped", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status, px, 560.0, 16.0, status_color);
}
