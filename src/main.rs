use macroquad::prelude::*;
use life_canvas::{
    FrameDriver, LifeConfig, SessionController,
    ui::{self, Slider, PANEL_WIDTH, SPEED_SLIDER_Y},
    rendering, input,
};

/// Frame loop flag: generations are only polled while the session asked
/// for frames
#[derive(Default)]
struct FrameLoop {
    active: bool,
}

impl FrameDriver for FrameLoop {
    fn request_frames(&mut self) {
        self.active = true;
    }

    fn cancel_frames(&mut self) {
        self.active = false;
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = LifeConfig::default();

    // Grid is sized once from the viewport left of the control panel
    let (rows, cols) = match config.grid_dimensions(ui::grid_area_width(), ui::grid_area_height()) {
        Ok(dims) => dims,
        Err(err) => {
            log::error!("cannot size grid: {}", err);
            return;
        }
    };

    let mut session = match SessionController::new(rows, cols, &config, FrameLoop::default()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("failed to initialise simulation: {}", err);
            return;
        }
    };

    let mut speed_slider = Slider::new(
        ui::panel_x(),
        SPEED_SLIDER_Y,
        PANEL_WIDTH,
        "Speed",
        config.speed.min,
        config.speed.max,
        session.speed(),
    );

    loop {
        let mouse_pos = mouse_position();
        speed_slider.set_position(ui::panel_x(), SPEED_SLIDER_Y);

        // Process input
        let buttons = ui::create_buttons(session.run_state());
        input::process_button_clicks(&mut session, &buttons, mouse_pos);
        if let Some(speed) = speed_slider.update(mouse_pos) {
            input::apply_speed(&mut session, &mut speed_slider, speed);
        }
        input::handle_cell_click(&mut session, config.cell_size, mouse_pos);
        input::process_keyboard_input(&mut session, &mut speed_slider, &config.speed);

        // Display refresh callback
        if session.driver().active {
            session.tick(get_time() * 1000.0);
        }

        clear_background(BLACK);
        rendering::draw_grid(session.grid(), config.cell_size);
        let buttons = ui::create_buttons(session.run_state());
        rendering::draw_controls(&session, &buttons, &speed_slider, mouse_pos);

        next_frame().await;
    }
}
