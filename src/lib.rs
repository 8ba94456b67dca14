//! Snake Mania: a single-player grid snake with lives, obstacles, and timed bonus food.
//!
//! The simulation lives in [`game`], [`snake`], and [`food`] and never touches the engine. The
//! Bevy plugins in [`control`], [`rendering`], and [`ui`] feed it time and input and draw its
//! snapshot.

pub mod food;
pub mod game;
pub mod snake;

#[cfg(feature = "app")]
pub mod control;
#[cfg(feature = "app")]
pub mod rendering;
#[cfg(feature = "app")]
pub mod ui;
