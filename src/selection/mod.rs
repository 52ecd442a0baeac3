//! Row selection and highlight color assignment.
//!
//! - [`Palette`] / [`PaletteColor`] - The fixed set of highlight colors
//! - [`ColorPool`] - Hands out palette colors without repeats and takes them back
//! - [`SelectionCoordinator`] - Single-row selection driving the pool
//! - [`RandomSource`] - Injectable randomness for color draws

pub mod coordinator;
pub mod palette;
pub mod pool;
pub mod random;

pub use coordinator::{AUTO_SELECT_INDEX, SelectionCoordinator, SelectionState, auto_select_index};
pub use palette::{Palette, PaletteColor};
pub use pool::ColorPool;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
