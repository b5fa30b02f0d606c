use macroquad::prelude::*;

use super::Action;

/// Panel button bound to one `Action`
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    action: Action,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>, action: Action) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
            action,
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Pointer is over the button (right and bottom edges excluded)
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    fn fill(&self, mouse_pos: (f32, f32), enabled: bool) -> Color {
        match (enabled, self.is_hovered(mouse_pos)) {
            (false, _) => Color::from_rgba(60, 60, 60, 255),
            (true, true) => Color::from_rgba(100, 149, 237, 255),
            (true, false) => Color::from_rgba(70, 130, 180, 255),
        }
    }

    /// Draw the button, greyed out when its action does nothing right now
    pub fn draw(&self, mouse_pos: (f32, f32), enabled: bool) {
        let Rect { x, y, w, h } = self.rect;
        let text_color = if enabled { WHITE } else { GRAY };

        draw_rectangle(x, y, w, h, self.fill(mouse_pos, enabled));
        draw_rectangle_lines(x, y, w, h, 2.0, text_color);

        let size = measure_text(&self.label, None, 20, 1.0);
        draw_text(&self.label, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 20.0, text_color);
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_area() {
        let button = Button::new(10.0, 20.0, 100.0, 40.0, "Start", Action::Start);
        assert!(button.is_hovered((10.0, 20.0)));
        assert!(button.is_hovered((109.9, 59.9)));
        assert!(!button.is_hovered((110.0, 30.0)));
        assert!(!button.is_hovered((50.0, 19.0)));
    }

    #[test]
    fn test_disabled_ignores_hover() {
        let button = Button::new(0.0, 0.0, 50.0, 20.0, "Stop", Action::Stop);
        let over = (5.0, 5.0);
        assert_eq!(button.fill(over, false), button.fill((500.0, 500.0), false));
        assert_ne!(button.fill(over, true), button.fill((500.0, 500.0), true));
    }
}
