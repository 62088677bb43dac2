//! Wind direction from compass letters.
//!
//! Conventions:
//! - Angles are mathematical, measured from +x (east):
//!   E = 0, S = π/2, W = π, N = 3π/2.
//! - A multi-letter spec (`SWW`) is the arithmetic mean of its letters,
//!   not a vector mean. Mixes across the E/N seam (`NE` -> 135°, i.e. SW)
//!   therefore do not land between the two letters.
//! - Unknown letters count as 0 but still count toward the divisor.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::coord::Point;
use crate::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindDirection {
    radians: f64,
}

impl WindDirection {
    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Parse a compass spec such as `N`, `sw`, `SWW`. Letters are
    /// upper-cased first.
    pub fn parse(spec: &str) -> Result<Self, ParseError> {
        let mut sum = 0.0;
        let mut count = 0u32;
        for c in spec.chars() {
            sum += letter_angle(c.to_ascii_uppercase());
            count += 1;
        }
        if count == 0 {
            return Err(ParseError::EmptyWind);
        }
        let radians = sum / f64::from(count);
        tracing::debug!(spec, degrees = radians.to_degrees(), "wind direction");
        Ok(Self { radians })
    }

    pub fn radians(self) -> f64 {
        self.radians
    }

    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Move `p` by `magnitude` meters against the wind.
    ///
    /// The wind angle lives in a downward-y frame, so the y component is
    /// subtracted.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn shift(self, p: Point, magnitude: i64) -> Point {
        let length = -(magnitude as f64);
        let dx = (self.radians.cos() * length).round() as i64;
        let dy = (self.radians.sin() * length).round() as i64;
        p.offset(dx, dy.saturating_neg())
    }
}

fn letter_angle(c: char) -> f64 {
    match c {
        'S' => 0.5 * PI,
        'W' => PI,
        'N' => 1.5 * PI,
        _ => 0.0,
    }
}
