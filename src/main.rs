use macroquad::prelude::*;
use life_board::{
    Config, GameState, Viewport,
    ui::{self, PatternSelector, Slider},
    rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1180,
        window_height: 800,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let config = Config::from_env();
    // The board is sized once from the drawing area and never re-derived
    let viewport = Viewport::new(ui::grid_area_width(), ui::grid_area_height(), config.cell_size);
    let (columns, rows) = viewport.board_dimensions();
    let mut state = match GameState::new(columns, rows, &config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("cannot start: {err}");
            return;
        }
    };
    log::info!("board {columns}x{rows}, {} gen/s, {} stepping", state.tick_rate, state.algorithm.name());

    let px = ui::panel_x();
    let mut slider = Slider::new(
        px + 10.0,
        ui::SLIDER_Y,
        ui::PANEL_WIDTH - 20.0,
        "Speed",
        config.min_tick_rate,
        config.max_tick_rate,
        state.tick_rate,
    );
    let mut selector = PatternSelector::new(px, ui::SELECTOR_Y, ui::PANEL_WIDTH, "Pattern");

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        if slider.update(mouse_pos) {
            state.set_tick_rate(slider.value());
        }

        // An open menu swallows the click so it can't also hit a button below
        let menu_was_open = selector.is_open();
        if selector.update(mouse_pos) {
            state.select_preset(selector.selected());
        }
        if !menu_was_open {
            state = input::process_button_clicks(state, &buttons, mouse_pos);
        }

        input::handle_mouse_paint(&mut state, &viewport, mouse_pos);
        state = input::process_keyboard_input(state, &mut slider);

        state = state.tick(get_frame_time());

        clear_background(WHITE);
        rendering::draw_grid(&state.grid, &viewport);
        rendering::draw_controls(&state, &buttons, &slider, &selector, mouse_pos);

        next_frame().await;
    }
}
