use crate::application::Config;
use crate::domain::{Algorithm, Cell, Grid, GridError, Preset};

/// GameState owns one simulation session.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    /// Generations per second while running
    pub tick_rate: f32,
    pub density: f64,
    /// Entry picked in the pattern selector
    pub preset: Preset,
    pub last_step_time_ms: f32,
}

impl GameState {
    /// Create a stopped session with an empty board
    pub fn new(columns: usize, rows: usize, config: &Config) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::create(columns, rows)?,
            algorithm: config.algorithm,
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            tick_rate: config.tick_rate,
            density: config.density,
            preset: Preset::default(),
            last_step_time_ms: 0.0,
        })
    }

    pub fn start(mut self) -> Self {
        if !self.is_running {
            log::info!("simulation started at generation {}", self.generation);
        }
        self.is_running = true;
        self
    }

    pub fn stop(mut self) -> Self {
        if self.is_running {
            log::info!("simulation stopped at generation {}", self.generation);
        }
        self.is_running = false;
        self.update_timer = 0.0;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running { self.stop() } else { self.start() }
    }

    /// Stop and clear the board
    pub fn reset(mut self) -> Self {
        self = self.stop();
        self.grid.reset();
        self.generation = 0;
        log::info!("board reset");
        self
    }

    /// Fill the board at the configured density. Keeps running if it was.
    pub fn randomize(mut self) -> Self {
        match self.grid.randomize(self.density) {
            Ok(()) => {
                self.generation = 0;
                log::info!("board randomized at density {:.2}", self.density);
            }
            Err(err) => log::warn!("randomize rejected: {err}"),
        }
        self
    }

    /// Choose the selector entry used by `apply_preset`
    pub fn select_preset(&mut self, preset: Preset) {
        self.preset = preset;
    }

    /// Apply the selected entry: randomize, or stamp its pattern
    pub fn apply_preset(self) -> Self {
        let preset = self.preset;
        self.apply(preset)
    }

    pub fn apply(mut self, preset: Preset) -> Self {
        match preset.pattern() {
            None => self.randomize(),
            Some(pattern) => {
                let (min_columns, min_rows) = pattern.min_dimensions();
                if self.grid.columns() < min_columns || self.grid.rows() < min_rows {
                    log::warn!(
                        "{} needs a {min_columns}x{min_rows} board; cells past the edge are dropped",
                        pattern.name
                    );
                }
                let placed = self.grid.stamp(pattern);
                log::info!("stamped {} ({placed} cells)", pattern.name);
                self
            }
        }
    }

    /// Bring a cell to life under the pointer
    pub fn paint(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.grid.set_cell(x, y, Cell::Alive)
    }

    /// Change the tick rate. Non-positive or non-finite rates are ignored.
    pub fn set_tick_rate(&mut self, rate: f32) -> bool {
        if !(rate > 0.0 && rate.is_finite()) {
            log::warn!("ignoring tick rate {rate}");
            return false;
        }
        self.tick_rate = rate;
        true
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Update simulation by one frame
    /// At most one generation is computed per call
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.tick_rate;

        if self.update_timer >= update_interval {
            let start = std::time::Instant::now();
            self.algorithm.step(&mut self.grid);
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}
