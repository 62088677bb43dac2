// crates/arty-ffi-wasm/src/lib.rs
//
// WASM bindings: fire-mission solve + table rendering for a JS chat front end.

use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

// --- our crates ---
use arty_core::GridConfig;
use arty_solver::{report, solve, FireMission, FireRequest};

// Better panic messages in browser console
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/* --------------------------- Shared DTOs (JS) --------------------------- */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsFireInput {
    pub from: String,
    pub to: String,
    /// Compass letters, e.g. "SWW". Absent or blank skips the wind table.
    #[serde(default)]
    pub wind: Option<String>,
    /// Grid overrides; any missing field keeps its default.
    #[serde(default)]
    pub config: Option<GridConfig>,
    /// Wrap `table` in a code fence.
    #[serde(default)]
    pub fenced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsWindRow {
    pub offset_m: i64,
    pub azimuth_deg: f64,
    pub distance_m: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsFireResult {
    pub from: String,
    pub to: String,
    pub wind: Option<String>,
    pub azimuth_deg: f64,
    pub distance_m: u64,
    pub wind_rows: Vec<JsWindRow>,
    pub table: String,
}

impl JsFireResult {
    fn from_mission(m: &FireMission, fenced: bool) -> Self {
        let table = if fenced { report::render_fenced(m) } else { report::render(m) };
        JsFireResult {
            from: m.from.clone(),
            to: m.to.clone(),
            wind: m.wind.clone(),
            azimuth_deg: m.direct.azimuth_deg,
            distance_m: m.direct.distance_m,
            wind_rows: m
                .wind_rows
                .iter()
                .map(|r| JsWindRow {
                    offset_m: r.offset_m,
                    azimuth_deg: r.azimuth_deg,
                    distance_m: r.distance_m,
                })
                .collect(),
            table,
        }
    }
}

/* ------------------------------- Solving -------------------------------- */

/// All logic behind the JS exports; plain Rust so it runs in native tests.
/// Bad coordinates or wind come back as the single user-facing message.
pub fn solve_js_input(inp: JsFireInput) -> Result<JsFireResult, String> {
    let grid = inp.config.unwrap_or_default();
    grid.validate().map_err(|e| e.to_string())?;

    let req = FireRequest::new(inp.from, inp.to, inp.wind);
    let mission = solve(&req, &grid).map_err(|e| {
        tracing::warn!(error = %e, "rejected fire mission");
        e.user_message().to_string()
    })?;

    Ok(JsFireResult::from_mission(&mission, inp.fenced))
}

#[wasm_bindgen]
pub fn solve_fire_mission_js(input: JsValue) -> Result<JsValue, JsValue> {
    let inp: JsFireInput = swb::from_value(input)?;
    let out = solve_js_input(inp).map_err(|e| JsValue::from_str(&e))?;
    swb::to_value(&out).map_err(|e| e.into())
}

/// Only the rendered table, for callers that just post text.
#[wasm_bindgen]
pub fn render_fire_mission_js(input: JsValue) -> Result<String, JsValue> {
    let inp: JsFireInput = swb::from_value(input)?;
    solve_js_input(inp).map(|r| r.table).map_err(|e| JsValue::from_str(&e))
}
