use macroquad::prelude::*;

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 8.0;

/// Horizontal slider selecting a whole-number value in `[min, max]`
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: f64,
    max: f64,
    value: f64,
    dragging: bool,
    label: String,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        Self {
            x,
            y,
            width,
            min,
            max,
            value: value.clamp(min, max),
            dragging: false,
            label: label.into(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Move the knob without reporting a change (keyboard path keeps it in sync)
    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Value under a horizontal screen position, snapped to whole steps
    pub fn value_at(&self, mouse_x: f32) -> f64 {
        let t = ((mouse_x - self.x) / self.width).clamp(0.0, 1.0) as f64;
        (self.min + t * (self.max - self.min)).round()
    }

    fn knob_x(&self) -> f32 {
        let span = self.max - self.min;
        let t = if span > 0.0 { (self.value - self.min) / span } else { 0.0 };
        self.x + t as f32 * self.width
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + KNOB_RADIUS
            && (mouse_pos.1 - self.y).abs() <= KNOB_RADIUS
    }

    /// Handle drag interaction; returns the new value if it changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<f64> {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }

        let value = self.value_at(mouse_pos.0);
        if value != self.value {
            self.value = value;
            Some(value)
        } else {
            None
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 12.0, 14.0, GRAY);

        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(70, 70, 70, 255),
        );

        let knob_color = if self.dragging || self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_circle(self.knob_x(), self.y, KNOB_RADIUS, knob_color);
    }
}
