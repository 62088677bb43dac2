//! Grid coordinates.
//!
//! A coordinate string is `Letter-Row[-Keypad]*`, e.g. `h-8-2-3`:
//!
//! ```text
//!   column letter   A=1, B=2, ... (case-insensitive)
//!   row             integer, counting downward
//!   keypad digits   7 8 9
//!                   4 5 6     each one moves within the current cell,
//!                   1 2 3     the step shrinking by 3 per level
//! ```
//!
//! The origin sits at the center of the addressed tile. Rows count
//! downward in the game, so y is negated to keep north = +y.

use std::fmt;
use std::ops::Sub;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GridConfig;
use crate::error::ParseError;

/// Position in meters; +x east, +y north.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Saturates at the i64 range instead of overflowing.
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self { x: self.x.saturating_add(dx), y: self.y.saturating_add(dy) }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl Sub for Point {
    type Output = Point;

    /// Saturating, like [`Point::offset`].
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x.saturating_sub(rhs.x), y: self.y.saturating_sub(rhs.y) }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unit step for a keypad digit, in the game's downward-y frame.
/// Anything outside 1..=9 stays put.
pub fn keypad_direction(digit: i64) -> (i64, i64) {
    match digit {
        7 => (-1, -1),
        8 => (0, -1),
        9 => (1, -1),
        4 => (-1, 0),
        6 => (1, 0),
        1 => (-1, 1),
        2 => (0, 1),
        3 => (1, 1),
        _ => (0, 0),
    }
}

/// Parse with the default 126 m / 42 m grid.
pub fn parse_coordinate(raw: &str) -> Result<Point, ParseError> {
    parse_coordinate_with(raw, &GridConfig::default())
}

pub fn parse_coordinate_with(raw: &str, grid: &GridConfig) -> Result<Point, ParseError> {
    debug!(raw, "parsing coordinate");

    let mut segments = raw.split('-');

    let column = segments
        .next()
        .and_then(|s| s.chars().next())
        .ok_or(ParseError::InvalidColumn)?;

    let row_segment = segments.next().unwrap_or_default();
    let bad_row = || ParseError::InvalidRow { segment: row_segment.to_owned() };
    let row: i64 = row_segment.parse().map_err(|_| bad_row())?;

    // Start from the center of the tile. Huge rows overflow i64 and are
    // rejected rather than wrapped.
    let half = grid.tile_size / 2;
    let mut x = column_index(column)
        .checked_mul(grid.tile_size)
        .and_then(|v| v.checked_add(half))
        .ok_or(ParseError::InvalidColumn)?;
    let mut y = row
        .checked_mul(grid.tile_size)
        .and_then(|v| v.checked_add(half))
        .ok_or_else(bad_row)?;

    let mut step = grid.small_tile_size;
    for (index, segment) in segments.enumerate() {
        let bad_refinement =
            || ParseError::InvalidRefinement { index: index + 1, segment: segment.to_owned() };
        let digit: i64 = segment.parse().map_err(|_| bad_refinement())?;
        debug!(digit, step, "keypad refinement");

        let (dx, dy) = keypad_direction(digit);
        x = dx.checked_mul(step).and_then(|d| x.checked_add(d)).ok_or_else(bad_refinement)?;
        y = dy.checked_mul(step).and_then(|d| y.checked_add(d)).ok_or_else(bad_refinement)?;
        // Integer division: past the fourth level the step is 0.
        step /= 3;
    }
    let y = y.checked_neg().ok_or_else(bad_row)?;

    let point = Point::new(x, y);
    debug!(x = point.x, y = point.y, "parsed coordinate");
    Ok(point)
}

/// `A` -> 1, `B` -> 2, ... Any other character goes through the same
/// arithmetic after ASCII upper-casing.
fn column_index(c: char) -> i64 {
    i64::from(u32::from(c.to_ascii_uppercase())) - i64::from(u32::from('A')) + 1
}
