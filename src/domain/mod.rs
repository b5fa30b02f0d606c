mod cell;
mod error;
mod grid;
mod patterns;
mod algorithm;
pub mod stability;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{Grid, DEFAULT_DENSITY};
pub use patterns::{Pattern, Preset, presets};
pub use algorithm::Algorithm;
pub use stability::Shade;
