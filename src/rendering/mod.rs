use macroquad::prelude::*;

use crate::application::{GameState, Viewport};
use crate::domain::{Grid, Shade, stability};
use crate::ui::{Button, PatternSelector, Slider, PANEL_WIDTH, panel_x};

/// Fill colour for a shaded cell
pub fn shade_color(shade: Shade) -> Color {
    match shade {
        Shade::Alive => Color::from_rgba(255, 0, 0, 255),
        Shade::Dead => Color::from_rgba(255, 255, 255, 255),
        Shade::Stable => Color::from_rgba(100, 100, 100, 255),
    }
}

fn stroke_color() -> Color {
    Color::from_rgba(50, 50, 50, 255)
}

/// Draw every cell of the board, coloured by how it changed last step
pub fn draw_grid(grid: &Grid, viewport: &Viewport) {
    let size = viewport.cell_size;
    let stroke = stroke_color();

    for (x, y, shade) in stability::shades(grid) {
        let (px, py) = viewport.cell_to_pixel(x, y);
        draw_rectangle(px, py, size, size, shade_color(shade));
        draw_rectangle_lines(px, py, size, size, 1.0, stroke);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, slider, selector and info
pub fn draw_controls(
    state: &GameState,
    buttons: &[Button],
    slider: &Slider,
    selector: &PatternSelector,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons
        .iter()
        .for_each(|btn| btn.draw(mouse_pos, btn.action().is_available(state.is_running)));
    slider.draw(mouse_pos);

    let px = panel_x();
    draw_text(state.preset.description(), px, 372.0, 12.0, Color::from_rgba(180, 180, 180, 255));

    let (columns, rows) = state.grid.dimensions();
    let labels = [
        (format!("Board: {columns}x{rows}"), 420.0, 14.0, Color::from_rgba(150, 150, 150, 255)),
        (format!("Generation: {}", state.generation), 445.0, 16.0, WHITE),
        (format!("Population: {}", state.grid.population()), 470.0, 16.0, WHITE),
        (
            if state.is_running { "Running".to_owned() } else { "Stopped".to_owned() },
            495.0,
            16.0,
            if state.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        (
            format!("{} | step {:.1}ms", state.algorithm.name(), state.last_step_time_ms),
            520.0,
            12.0,
            GRAY,
        ),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    // Selector last so an open menu sits on top
    selector.draw(mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_palette() {
        assert_eq!(shade_color(Shade::Alive), Color::from_rgba(255, 0, 0, 255));
        assert_eq!(shade_color(Shade::Dead), WHITE);
        assert_ne!(shade_color(Shade::Stable), shade_color(Shade::Alive));
    }
}
