//! Core artillery grid utilities
//!
//! Includes:
//! - Planar points in meters (`Point`)
//! - Grid coordinate parsing (`h-8-2-3` style, keypad refinement)
//! - Wind specification from compass letters
//! - Grid configuration (tile sizes, wind sample offsets)
//!
//! Coordinates are integer meters. Internally "up" (north) is +y; the
//! parser flips the game's downward-counting rows into that frame.

pub mod config;
pub mod coord;
pub mod error;
pub mod wind;

pub use config::{ConfigError, GridConfig, DEFAULT_WIND_OFFSETS, SMALL_TILE_SIZE, TILE_SIZE};
pub use coord::{keypad_direction, parse_coordinate, parse_coordinate_with, Point};
pub use error::ParseError;
pub use wind::WindDirection;
