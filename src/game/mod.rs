//! Core game module: geometry, configuration, events, and the game state machine.

mod bonus;
mod config;
mod constants;
mod events;
mod grid;
mod input;
mod obstacles;
mod scoring;
mod snapshot;
mod state;

pub use bonus::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use grid::*;
pub use input::*;
pub use obstacles::*;
pub use scoring::*;
pub use snapshot::*;
pub use state::*;
