mod button;
mod selector;
mod slider;

pub use button::Button;
pub use selector::PatternSelector;
pub use slider::Slider;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
    Reset,
    Randomize,
    ApplyPattern,
}

impl Action {
    /// Whether the action does anything in the current run state.
    /// Start is pointless while running, Stop while stopped.
    pub fn is_available(self, running: bool) -> bool {
        match self {
            Action::Start => !running,
            Action::Stop => running,
            Action::Reset | Action::Randomize | Action::ApplyPattern => true,
        }
    }
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Panel buttons laid out from the top of a panel starting at `px`
pub fn buttons_at(px: f32) -> Vec<Button> {
    vec![
        Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, "Start", Action::Start),
        Button::new(px, 64.0, PANEL_WIDTH, BUTTON_HEIGHT, "Stop", Action::Stop),
        Button::new(px, 108.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset", Action::Reset),
        Button::new(px, 152.0, PANEL_WIDTH, BUTTON_HEIGHT, "Randomize", Action::Randomize),
        Button::new(px, 320.0, PANEL_WIDTH, BUTTON_HEIGHT, "Apply", Action::ApplyPattern),
    ]
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    buttons_at(panel_x())
}

/// Y of the speed slider track
pub const SLIDER_Y: f32 = 230.0;
/// Y of the pattern selector
pub const SELECTOR_Y: f32 = 280.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_button_owns_its_area() {
        let buttons = buttons_at(0.0);
        let mids = [20.0, 64.0, 108.0, 152.0, 320.0].map(|y| (PANEL_WIDTH / 2.0, y + BUTTON_HEIGHT / 2.0));

        for (button, mid) in buttons.iter().zip(mids) {
            let hits: Vec<_> = buttons.iter().filter(|b| b.is_hovered(mid)).map(|b| b.action()).collect();
            assert_eq!(hits, vec![button.action()], "{:?} is not alone", button.action());
        }
    }

    #[test]
    fn test_start_and_stop_follow_run_state() {
        assert!(Action::Start.is_available(false));
        assert!(!Action::Start.is_available(true));
        assert!(Action::Stop.is_available(true));
        assert!(!Action::Stop.is_available(false));
        assert!(Action::Reset.is_available(true) && Action::Reset.is_available(false));
    }
}
