//! Plain-text firing table.
//!
//! ```text
//! From: h-8-2
//! To:   h-7-5
//! Wind: SW
//!
//! -----------------------------------------------------------------------------------
//! Wind:      none  |   10M  |   20M  | ...
//! -----------------------------------------------------------------------------------
//! Distance:   168  |   175  |   182  | ...
//! Azimuth:    0.0  |   3.3  |   6.3  | ...
//! -----------------------------------------------------------------------------------
//! ```

use crate::FireMission;

const RULE_WIDTH: usize = 83;

pub fn render(mission: &FireMission) -> String {
    let offsets: String =
        mission.wind_rows.iter().map(|r| format!(" {:4}M  |", r.offset_m)).collect();
    let distances: String =
        mission.wind_rows.iter().map(|r| format!(" {:5}  |", r.distance_m)).collect();
    let azimuths: String =
        mission.wind_rows.iter().map(|r| format!(" {:5.1}  |", r.azimuth_deg)).collect();

    let rule = "-".repeat(RULE_WIDTH);
    let wind = mission.wind.as_deref().unwrap_or("none");

    format!(
        "From: {from}\n\
         To:   {to}\n\
         Wind: {wind}\n\
         \n\
         {rule}\n\
         Wind:      none  | {offsets}\n\
         {rule}\n\
         Distance: {distance:5}  | {distances}\n\
         Azimuth:  {azimuth:5.1}  | {azimuths}\n\
         {rule}\n",
        from = mission.from,
        to = mission.to,
        distance = mission.direct.distance_m,
        azimuth = mission.direct.azimuth_deg,
    )
}

/// The table inside a code fence, ready for a chat message.
pub fn render_fenced(mission: &FireMission) -> String {
    format!("```\n{}```", render(mission))
}
