// src/flatten.rs
//
// One fixed column table drives flattening. Every record is built by walking
// the same table, so the field set and order never vary within (or across) runs.

use serde_json::{Map, Value};

use crate::model::{RawShot, Session};

/// Suffix of measurements delivered in "parameter string" encoding.
pub const PARAM_MARKER: &str = "_PARAMETER_STRING";

const RESULT_PARAMETERS: &str = "ResultParameters";
const WEATHER_DATA: &str = "WeatherData";
const SWING_PARAMETERS: &str = "GolfSwingParameters";

/// Where a column's value comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    SessionId,
    SessionName,
    SessionDate,
    AppVersion,
    SessionLocation,
    /// Top-level shot field.
    Shot(&'static str),
    /// Result parameter read as `<key>_PARAMETER_STRING`.
    Param(&'static str),
    /// Result parameter read under its bare key.
    ParamBare(&'static str),
    /// Swing parameter read as `<key>_PARAMETER_STRING`.
    Swing(&'static str),
    /// Swing parameter read under its bare key.
    SwingBare(&'static str),
    Weather(&'static str),
}

use Source::*;

pub const COLUMNS: &[(&str, Source)] = &[
    // Session
    ("session_id", SessionId),
    ("session_name", SessionName),
    ("session_date", SessionDate),
    ("app_version", AppVersion),
    ("session_location", SessionLocation),
    // Shot identity
    ("result_id", Shot("ResultID")),
    ("swing_index", Shot("SwingIndex")),
    ("shot_datetime", Shot("ShotDateTime")),
    ("club_id", Shot("ClubID")),
    ("club_type_id", Shot("ClubTypeID")),
    ("is_invalid", Shot("IsInvalid")),
    ("is_deleted", Shot("IsDeleted")),
    ("result_type", Shot("ResultType")),
    // Classification
    ("shot_classification", Swing("SHOTCLASSIFICATION")),
    ("detection_mode", Swing("DETECTION_MODE")),
    ("radar_type", SwingBare("RADARCAMERATYPE")),
    ("range_ball", SwingBare("RANGEBALL")),
    // Distances
    ("carry_dist_yards", Param("CARRYDIST")),
    ("total_dist_yards", Param("TOTALDIST")),
    ("roll_dist_yards", Param("ROLLDIST")),
    ("lateral_yards", Param("LATERAL")),
    ("curve_dist_yards", Param("CURVEDIST")),
    ("height_yards", Param("HEIGHT")),
    ("flight_time_sec", Param("FLIGHTTIME")),
    // Speed
    ("ball_speed_ms", Param("LAUNCHSPEED")),
    ("club_head_speed_ms", Param("CLUBHEADSPEED")),
    ("club_head_speed_post_ms", Param("CLUBHEADSPEEDPOST")),
    ("smash_factor", Param("SMASH")),
    // Launch
    ("launch_angle_deg", Param("LAUNCHELEV")),
    ("launch_direction_deg", Param("LAUNCHAZIM")),
    // Spin
    ("backspin_rpm", Param("BACKSPIN")),
    ("sidespin_rpm", Param("SIDESPIN")),
    ("total_spin_rpm", Param("SPIN")),
    ("spin_is_estimate", ParamBare("SPIN_IS_ESTIMATE")),
    ("spin_axis_deg", Param("SPINAXIS")),
    ("spin_loft_deg", Param("SPINLOFT")),
    // Club & impact
    ("face_angle_deg", Param("CLUBFACEANGLE")),
    ("face_to_path_deg", Param("FACETOPATH")),
    ("effective_loft_deg", Param("EFFECTIVELOFT")),
    ("swing_plane_tilt_deg", Param("SWINGPLANETILT")),
    ("swing_plane_rotation_deg", Param("SWINGPLANEROTATION")),
    ("club_strike_dir_deg", Param("CLUBSTRIKEDIR")),
    ("club_strike_dir_vert_deg", Param("CLUBSTRIKEDIRVERT")),
    ("impact_elev_deg", Param("IMPACTELEV")),
    ("fusion_impact_lateral", ParamBare("FusionImpactLocationLateral")),
    ("fusion_impact_vertical", ParamBare("FusionImpactLocationVertical")),
    ("club_low_point", ParamBare("CLUB_LOW_POINT")),
    // Weather & position
    ("weather_temperature_c", Weather("WEATHER_TEMPERATURE")),
    ("weather_humidity_pct", Weather("WEATHER_HUMIDITY")),
    ("weather_pressure_atm", Weather("WEATHER_PRESSURE")),
    ("weather_wind_speed_ms", Weather("WEATHER_WIND_SPEED")),
    ("weather_wind_dir_deg", Weather("WEATHER_WIND_DIRECTION_ANGLE")),
    ("gps_latitude", Weather("LATITUDE")),
    ("gps_longitude", Weather("LONGITUDE")),
    ("altitude_m", Weather("ALTITUDE")),
];

/// Column names in export order.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    COLUMNS.iter().map(|(name, _)| *name)
}

/// One flattened shot: exactly one cell per entry of [`COLUMNS`], in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatRecord {
    cells: Vec<String>,
}

impl FlatRecord {
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        let idx = COLUMNS.iter().position(|(name, _)| *name == field)?;
        self.cells.get(idx).map(String::as_str)
    }

    /// `(field, value)` pairs in export order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        field_names().zip(self.cells.iter().map(String::as_str))
    }
}

/// Flatten one shot with its owning session's metadata. Total: absent fields
/// and absent groups become empty strings.
pub fn flatten(shot: &RawShot, session: &Session) -> FlatRecord {
    let empty = Map::new();
    let params = shot.group(RESULT_PARAMETERS).unwrap_or(&empty);
    let weather = shot.group(WEATHER_DATA).unwrap_or(&empty);
    let swing = shot.group(SWING_PARAMETERS).unwrap_or(&empty);

    let cells = COLUMNS
        .iter()
        .map(|(_, src)| match *src {
            SessionId => session.id.clone(),
            SessionName => session.display_name.clone(),
            SessionDate => session.create_date.clone(),
            AppVersion => session.app_version.clone(),
            SessionLocation => session.location.clone(),
            Shot(key) => cell(shot.field(key)),
            Param(key) => marked(params, key),
            ParamBare(key) => cell(params.get(key)),
            Swing(key) => marked(swing, key),
            SwingBare(key) => cell(swing.get(key)),
            Weather(key) => cell(weather.get(key)),
        })
        .collect();

    FlatRecord { cells }
}

fn marked(group: &Map<String, Value>, key: &str) -> String {
    cell(group.get(&format!("{key}{PARAM_MARKER}")))
}

/// Render a value verbatim. No unit or type conversion happens here.
fn cell(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => s!(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(nested) => nested.to_string(),
    }
}
