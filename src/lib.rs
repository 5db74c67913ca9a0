//! Grid snake: the board, its tick-by-tick simulation, and the thin input
//! and drawing layers the window driver plugs into.

pub mod apple;
pub mod config;
pub mod direction;
pub mod grid;
pub mod input;
pub mod render;
pub mod session;
pub mod simulation;

pub use apple::ApplePlacement;
pub use config::{ConfigError, GameConfig};
pub use direction::{Dir, Turn};
pub use grid::{Cell, DeathCause, GridError, GridState, Pos, Status};
pub use input::Intent;
pub use session::Session;
pub use simulation::StepOutcome;
