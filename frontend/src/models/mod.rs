//! View-models projecting raw store records for display.

pub mod player;

pub use player::Player;
