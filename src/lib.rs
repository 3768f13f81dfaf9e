// Domain layer - core simulation logic
pub mod domain;

// Re-exports for convenience
pub use domain::{Cell, CellColor, CellState, Grid, GridError, NeighborTally, Pattern, presets};
