// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Session, settings and viewport
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, GridError, Pattern, Preset, Shade, presets};
pub use application::{Config, GameState, Viewport};
pub use ui::Button;
