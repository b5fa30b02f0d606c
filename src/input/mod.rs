use macroquad::prelude::*;

use crate::application::{GameState, Viewport};
use crate::ui::{Action, Button, Slider, grid_area_width};

/// Paint cells alive while the left button is held over the board
pub fn handle_mouse_paint(state: &mut GameState, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= grid_area_width() || !is_mouse_button_down(MouseButton::Left) {
        return;
    }
    paint_at(state, viewport, mouse_pos);
}

/// Translate a pointer position and paint the cell under it, if any
pub fn paint_at(state: &mut GameState, viewport: &Viewport, mouse_pos: (f32, f32)) {
    let Some((x, y)) = viewport.pixel_to_cell(mouse_pos.0, mouse_pos.1, state.grid.dimensions()) else {
        return;
    };
    if let Err(err) = state.paint(x, y) {
        log::warn!("paint rejected: {err}");
    }
}

/// Run a panel action against the session
pub fn apply_action(state: GameState, action: Action) -> GameState {
    match action {
        Action::Start => state.start(),
        Action::Stop => state.stop(),
        Action::Reset => state.reset(),
        Action::Randomize => state.randomize(),
        Action::ApplyPattern => state.apply_preset(),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, slider: &mut Slider) -> GameState {
    let actions = [
        (KeyCode::Enter, Action::Start),
        (KeyCode::Escape, Action::Stop),
        (KeyCode::C, Action::Reset),
        (KeyCode::R, Action::Randomize),
        (KeyCode::P, Action::ApplyPattern),
    ];

    let mut state = actions.iter().fold(state, |s, &(key, action)| {
        if is_key_pressed(key) { apply_action(s, action) } else { s }
    });

    if is_key_pressed(KeyCode::Space) {
        state = state.toggle_running();
    }
    if is_key_pressed(KeyCode::A) {
        let algorithm = state.algorithm.next();
        log::info!("stepping with {}", algorithm.name());
        state.set_algorithm(algorithm);
    }

    let nudge = if is_key_pressed(KeyCode::Up) {
        1.0
    } else if is_key_pressed(KeyCode::Down) {
        -1.0
    } else {
        0.0
    };
    if nudge != 0.0 {
        slider.set_value(slider.value() + nudge);
        state.set_tick_rate(slider.value());
    }

    state
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| apply_action(s, btn.action()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Config;
    use crate::domain::{Cell, Preset};

    fn state() -> GameState {
        GameState::new(10, 5, &Config::default()).unwrap()
    }

    #[test]
    fn test_paint_translates_pixels() {
        let mut s = state();
        let viewport = Viewport::new(200.0, 100.0, 20.0);

        paint_at(&mut s, &viewport, (45.0, 61.0));
        assert_eq!(s.grid.get(2, 3), Some(Cell::Alive));

        // past the last row
        paint_at(&mut s, &viewport, (45.0, 101.0));
        assert_eq!(s.grid.population(), 1);
    }

    #[test]
    fn test_actions() {
        let s = apply_action(state(), Action::Start);
        assert!(s.is_running);
        let s = apply_action(s, Action::Stop);
        assert!(!s.is_running);

        let mut s = s;
        s.select_preset(Preset::Glider);
        let s = apply_action(s, Action::ApplyPattern);
        assert_eq!(s.grid.population(), 5);

        let s = apply_action(s.start(), Action::Reset);
        assert!(!s.is_running);
        assert_eq!(s.grid.population(), 0);
    }
}
