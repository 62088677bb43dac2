//! arty-solver
//!
//! Flat-map firing solutions between two grid coordinates.
//! - Distance is the rounded Euclidean length of `to - from` [m].
//! - Azimuth is a compass bearing [deg]: 0° = north, increasing clockwise.
//! - Wind tables re-aim at the target shifted *against* the wind by each
//!   sampled magnitude, bracketing an unknown wind strength.
//!
//! Conventions:
//! - Points come from `arty_core` with +x east and +y north.
//! - Same-point input is not special-cased: distance 0, azimuth 90
//!   (`atan2(0, 0) = 0`).

pub mod report;

use arty_core::{parse_coordinate_with, GridConfig, ParseError, Point, WindDirection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bearing and range for one aim point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FiringSolution {
    pub azimuth_deg: f64,
    pub distance_m: u64,
}

/// One column of a wind table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindRow {
    pub offset_m: i64,
    pub azimuth_deg: f64,
    pub distance_m: u64,
}

/// Solve the direct shot from `from` to `to`. Never fails.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate(from: Point, to: Point) -> FiringSolution {
    // Normalize so `from` is the origin. Done in f64 so far-apart points
    // cannot overflow.
    let v = to.to_vector() - from.to_vector();
    debug!(%from, %to, dx = v.x, dy = v.y, "normalized to shooter");

    let distance_m = v.norm().round() as u64;
    let azimuth_deg = compass_from_math(v.y.atan2(v.x).to_degrees());

    FiringSolution { azimuth_deg, distance_m }
}

/// Mathematical angle (0 = east, CCW) -> compass (0 = north, CW), in [0, 360).
fn compass_from_math(raw_deg: f64) -> f64 {
    let mut azimuth_deg = -(raw_deg - 90.0);
    while azimuth_deg < 0.0 {
        azimuth_deg += 360.0;
    }
    azimuth_deg = azimuth_deg.abs();
    // `tiny negative + 360` can round up to exactly 360.
    if azimuth_deg >= 360.0 {
        azimuth_deg -= 360.0;
    }
    azimuth_deg
}

/// One row per entry of `offsets`, in the given order.
pub fn wind_table(
    from: Point,
    to: Point,
    wind: &str,
    offsets: &[i64],
) -> Result<Vec<WindRow>, ParseError> {
    let dir = WindDirection::parse(wind)?;
    Ok(wind_rows(from, to, dir, offsets))
}

/// Same as [`wind_table`] with an already parsed direction.
pub fn wind_rows(from: Point, to: Point, dir: WindDirection, offsets: &[i64]) -> Vec<WindRow> {
    offsets
        .iter()
        .map(|&offset_m| {
            let aim = dir.shift(to, offset_m);
            let s = calculate(from, aim);
            WindRow { offset_m, azimuth_deg: s.azimuth_deg, distance_m: s.distance_m }
        })
        .collect()
}

/* ------------------------------ fire missions ------------------------------ */

/// Raw inputs of one request, exactly as the user typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireRequest {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub wind: Option<String>,
}

impl FireRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, wind: Option<String>) -> Self {
        Self { from: from.into(), to: to.into(), wind }
    }

    /// Upper-cased wind spec, or `None` when absent or blank.
    pub fn wind_spec(&self) -> Option<String> {
        self.wind
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_ascii_uppercase)
    }
}

/// A solved request: the direct shot plus an optional wind table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FireMission {
    pub from: String,
    pub to: String,
    pub wind: Option<String>,
    pub from_point: Point,
    pub to_point: Point,
    pub direct: FiringSolution,
    pub wind_rows: Vec<WindRow>,
}

/// Parse both coordinates, solve the direct shot and, when a wind spec is
/// given, the wind table over `grid.wind_offsets`. The first error aborts
/// the whole request.
pub fn solve(req: &FireRequest, grid: &GridConfig) -> Result<FireMission, ParseError> {
    debug!(from = %req.from, to = %req.to, wind = ?req.wind, "solving fire mission");

    let from_point = parse_coordinate_with(&req.from, grid)?;
    let to_point = parse_coordinate_with(&req.to, grid)?;
    let direct = calculate(from_point, to_point);

    let wind = req.wind_spec();
    let wind_rows = match &wind {
        Some(spec) => wind_table(from_point, to_point, spec, &grid.wind_offsets)?,
        None => Vec::new(),
    };

    Ok(FireMission {
        from: req.from.clone(),
        to: req.to.clone(),
        wind,
        from_point,
        to_point,
        direct,
        wind_rows,
    })
}

/* ----------------------------------- tests ---------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use arty_core::parse_coordinate;

    fn solve_pair(from: &str, to: &str) -> FiringSolution {
        calculate(parse_coordinate(from).unwrap(), parse_coordinate(to).unwrap())
    }

    #[test]
    fn cardinal_and_diagonal_shots() {
        let cases = [
            ("up", "h-8-2", "h-7-5", 168, 0.0),
            ("right", "h-8-5", "i-8-6", 168, 90.0),
            ("left", "h-8-5", "g-8-6", 84, 270.0),
            ("upleft", "h-8-5", "g-7-5", 178, 315.0),
        ];
        for (name, from, to, dist, az) in cases {
            let s = solve_pair(from, to);
            assert_eq!(s.distance_m, dist, "distance for {name}");
            assert_abs_diff_eq!(s.azimuth_deg, az, epsilon = 1e-9);
        }
    }

    #[test]
    fn same_point_is_ninety_degrees() {
        let p = Point::new(500, -700);
        let s = calculate(p, p);
        assert_eq!(s.distance_m, 0);
        assert_abs_diff_eq!(s.azimuth_deg, 90.0);
    }

    #[test]
    fn south_is_one_eighty() {
        let s = calculate(Point::new(0, 0), Point::new(0, -300));
        assert_eq!(s.distance_m, 300);
        assert_abs_diff_eq!(s.azimuth_deg, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn compass_never_returns_360() {
        // One ulp past 90° gives -1.4e-14, and adding 360 rounds to 360.0.
        let just_past_north = f64::from_bits(90.0_f64.to_bits() + 1);
        assert_eq!(-(just_past_north - 90.0) + 360.0, 360.0);
        assert_eq!(compass_from_math(just_past_north), 0.0);

        assert_abs_diff_eq!(compass_from_math(90.0), 0.0);
        assert_abs_diff_eq!(compass_from_math(0.0), 90.0);
        assert_abs_diff_eq!(compass_from_math(-90.0), 180.0);
        assert_abs_diff_eq!(compass_from_math(180.0), 270.0);
        assert_abs_diff_eq!(compass_from_math(-180.0), 270.0);
    }

    #[test]
    fn far_apart_points_do_not_overflow() {
        let s = calculate(Point::new(i64::MIN, 0), Point::new(i64::MAX, 0));
        assert!(s.distance_m > 0);
        assert_abs_diff_eq!(s.azimuth_deg, 90.0);
    }

    #[test]
    fn reverse_shot_is_opposite() {
        let pairs = [
            (Point::new(0, 0), Point::new(37, 91)),
            (Point::new(-400, 12), Point::new(250, -999)),
            (Point::new(10, 10), Point::new(10, 500)),
            (Point::new(3, -7), Point::new(-80, -7)),
        ];
        for (a, b) in pairs {
            let fwd = calculate(a, b);
            let back = calculate(b, a);
            assert_eq!(fwd.distance_m, back.distance_m);
            let diff = (fwd.azimuth_deg - back.azimuth_deg).rem_euclid(360.0);
            assert_abs_diff_eq!(diff, 180.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn azimuth_stays_in_range() {
        for x in -20..=20 {
            for y in -20..=20 {
                let s = calculate(Point::default(), Point::new(x * 37, y * 53));
                assert!((0.0..360.0).contains(&s.azimuth_deg), "{x},{y} -> {}", s.azimuth_deg);
            }
        }
    }

    #[test]
    fn wind_table_keeps_offset_order() {
        let from = parse_coordinate("h-8-5").unwrap();
        let to = parse_coordinate("h-4-5").unwrap();
        let offsets = [10, 20, 30, 40, 50, 100, 150, 200, 250];
        for wind in ["N", "S", "E", "W", "SWW", "ne"] {
            let rows = wind_table(from, to, wind, &offsets).unwrap();
            assert_eq!(rows.len(), 9);
            let got: Vec<i64> = rows.iter().map(|r| r.offset_m).collect();
            assert_eq!(got, offsets);
        }
    }

    #[test]
    fn wind_table_aims_against_the_wind() {
        // Target due north; an east wind means aim further west.
        let from = Point::new(0, 0);
        let to = Point::new(0, 1000);
        let rows = wind_table(from, to, "E", &[100]).unwrap();
        let expected = calculate(from, Point::new(-100, 1000));
        assert_eq!(rows[0].distance_m, expected.distance_m);
        assert_abs_diff_eq!(rows[0].azimuth_deg, expected.azimuth_deg);
        assert!(rows[0].azimuth_deg > 270.0);

        // A south wind pushes short, so the aim point moves north.
        let rows = wind_table(from, to, "S", &[50]).unwrap();
        assert_eq!(rows[0].distance_m, 1050);
    }

    #[test]
    fn empty_wind_fails_whole_table() {
        let p = Point::default();
        assert_eq!(wind_table(p, p, "", &[10, 20]), Err(ParseError::EmptyWind));
    }

    #[test]
    fn solve_without_wind() {
        let req = FireRequest::new("h-8-2", "h-7-5", None);
        let m = solve(&req, &GridConfig::default()).unwrap();
        assert_eq!(m.direct.distance_m, 168);
        assert!(m.wind.is_none());
        assert!(m.wind_rows.is_empty());
    }

    #[test]
    fn blank_wind_is_no_wind() {
        let req = FireRequest::new("h-8-2", "h-7-5", Some("  ".into()));
        let m = solve(&req, &GridConfig::default()).unwrap();
        assert!(m.wind.is_none());
        assert!(m.wind_rows.is_empty());
    }

    #[test]
    fn solve_with_wind_uses_configured_offsets() {
        let grid = GridConfig { wind_offsets: vec![5, 15], ..GridConfig::default() };
        let req = FireRequest::new("h-8-2", "h-7-5", Some("sw".into()));
        let m = solve(&req, &grid).unwrap();
        assert_eq!(m.wind.as_deref(), Some("SW"));
        assert_eq!(m.wind_rows.len(), 2);
        assert_eq!(m.wind_rows[1].offset_m, 15);
    }

    #[test]
    fn solve_stops_at_first_bad_coordinate() {
        let req = FireRequest::new("h-x-2", "nope", Some("N".into()));
        assert_eq!(
            solve(&req, &GridConfig::default()),
            Err(ParseError::InvalidRow { segment: "x".into() })
        );
    }
}
