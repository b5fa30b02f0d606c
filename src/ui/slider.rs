use macroquad::prelude::*;

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 8.0;

/// Horizontal slider over a whole-number range
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: f32,
    max: f32,
    value: f32,
    label: String,
    dragging: bool,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: f32, max: f32, value: f32) -> Self {
        Self {
            x,
            y,
            width,
            min,
            max,
            value: value.clamp(min, max),
            label: label.into(),
            dragging: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set value, clamped to the slider range
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Value under a pointer at `mouse_x`, rounded to a whole step
    pub fn value_at(&self, mouse_x: f32) -> f32 {
        let t = ((mouse_x - self.x) / self.width).clamp(0.0, 1.0);
        (self.min + t * (self.max - self.min)).round().clamp(self.min, self.max)
    }

    fn knob_x(&self) -> f32 {
        let span = self.max - self.min;
        let t = if span > 0.0 { (self.value - self.min) / span } else { 0.0 };
        self.x + t * self.width
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + KNOB_RADIUS
            && (mouse_pos.1 - self.y).abs() <= KNOB_RADIUS
    }

    /// Handle dragging and return true if the value changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return false;
        }

        let value = self.value_at(mouse_pos.0);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 14.0, 14.0, GRAY);
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(60, 60, 60, 255),
        );

        let knob_color = if self.dragging || self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_circle(self.knob_x(), self.y, KNOB_RADIUS, knob_color);
        draw_text(
            &format!("{:.0} FPS", self.value),
            self.x,
            self.y + 24.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_maps_track() {
        let slider = Slider::new(0.0, 0.0, 100.0, "Speed", 1.0, 61.0, 30.0);
        assert_eq!(slider.value_at(-20.0), 1.0);
        assert_eq!(slider.value_at(50.0), 31.0);
        assert_eq!(slider.value_at(500.0), 61.0);
    }

    #[test]
    fn test_value_is_clamped() {
        let mut slider = Slider::new(0.0, 0.0, 100.0, "Speed", 1.0, 60.0, 90.0);
        assert_eq!(slider.value(), 60.0);
        slider.set_value(0.0);
        assert_eq!(slider.value(), 1.0);
    }
}
