//! Session settings with environment overrides.

use thiserror::Error;

use crate::domain::{Algorithm, DEFAULT_DENSITY};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be at least {min}px, got {0}", min = MIN_CELL_SIZE)]
    CellSize(f32),
    #[error("tick rate range {min}..={max} is empty or not positive")]
    TickRange { min: f32, max: f32 },
    #[error("tick rate {0} is outside the slider range")]
    TickRate(f32),
    #[error("density {0} is not in [0, 1]")]
    Density(f64),
}

/// Smallest cell side in pixels accepted from configuration
pub const MIN_CELL_SIZE: f32 = 1.0;

fn valid_cell_size(size: f32) -> bool {
    size.is_finite() && size >= MIN_CELL_SIZE
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Side of one cell in pixels
    pub cell_size: f32,
    /// Generations per second while running
    pub tick_rate: f32,
    pub min_tick_rate: f32,
    pub max_tick_rate: f32,
    /// Alive probability used by Randomize
    pub density: f64,
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            tick_rate: 30.0,
            min_tick_rate: 1.0,
            max_tick_rate: 60.0,
            density: DEFAULT_DENSITY,
            algorithm: Algorithm::default(),
        }
    }
}

/// Parse `raw` for `key`, keeping `fallback` (and warning) when it doesn't parse
fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, fallback: T) -> T {
    let Some(raw) = raw else {
        return fallback;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a valid value");
            fallback
        }
    }
}

impl Config {
    /// Defaults overridden by LIFE_CELL_SIZE, LIFE_TICK_RATE, LIFE_DENSITY
    /// and LIFE_ALGORITHM
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, falling back field by field to the
    /// current value when an override is missing or invalid
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = self.clone();
        let mut config = Self {
            cell_size: parse_or("LIFE_CELL_SIZE", lookup("LIFE_CELL_SIZE"), self.cell_size),
            tick_rate: parse_or("LIFE_TICK_RATE", lookup("LIFE_TICK_RATE"), self.tick_rate),
            density: parse_or("LIFE_DENSITY", lookup("LIFE_DENSITY"), self.density),
            algorithm: parse_or("LIFE_ALGORITHM", lookup("LIFE_ALGORITHM"), self.algorithm),
            ..self
        };

        // Out-of-range values fall back individually
        if let Err(err) = config.validate() {
            log::warn!("{err}; using defaults for invalid settings");
            if !valid_cell_size(config.cell_size) {
                config.cell_size = defaults.cell_size;
            }
            if !(config.min_tick_rate..=config.max_tick_rate).contains(&config.tick_rate) {
                config.tick_rate = defaults.tick_rate;
            }
            if !(0.0..=1.0).contains(&config.density) {
                config.density = defaults.density;
            }
        }
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !valid_cell_size(self.cell_size) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(self.min_tick_rate > 0.0 && self.min_tick_rate <= self.max_tick_rate) {
            return Err(ConfigError::TickRange { min: self.min_tick_rate, max: self.max_tick_rate });
        }
        if !(self.min_tick_rate..=self.max_tick_rate).contains(&self.tick_rate) {
            return Err(ConfigError::TickRate(self.tick_rate));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.cell_size, 20.0);
        assert_eq!(config.tick_rate, 30.0);
        assert_eq!(config.density, 0.3);
    }

    #[test]
    fn test_overrides_apply() {
        let config = Config::default().with_overrides(lookup(&[
            ("LIFE_CELL_SIZE", "10"),
            ("LIFE_TICK_RATE", "12.5"),
            ("LIFE_DENSITY", "0.5"),
            ("LIFE_ALGORITHM", "serial"),
        ]));
        assert_eq!(config.cell_size, 10.0);
        assert_eq!(config.tick_rate, 12.5);
        assert_eq!(config.density, 0.5);
        assert_eq!(config.algorithm, Algorithm::Serial);
    }

    #[test]
    fn test_bad_overrides_keep_defaults() {
        let config = Config::default().with_overrides(lookup(&[
            ("LIFE_CELL_SIZE", "-4"),
            ("LIFE_TICK_RATE", "fast"),
            ("LIFE_DENSITY", "2.0"),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_tiny_cell_size_falls_back() {
        let config = Config::default().with_overrides(lookup(&[("LIFE_CELL_SIZE", "0.001")]));
        assert_eq!(config.cell_size, 20.0);
    }

    #[test]
    fn test_validate_rejects() {
        let config = Config { tick_rate: 0.5, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::TickRate(0.5)));

        let config = Config { cell_size: 0.0, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::CellSize(0.0)));

        let config = Config { cell_size: 0.5, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::CellSize(0.5)));
        let config = Config { cell_size: MIN_CELL_SIZE, ..Config::default() };
        assert_eq!(config.validate(), Ok(()));

        let config = Config { min_tick_rate: 10.0, max_tick_rate: 5.0, ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::TickRange { .. })));
    }
}
