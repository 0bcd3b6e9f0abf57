use crate::services::tfl_client::types::tfl_stop_point::TflStopPoint;

pub const STATION_NAME_SUFFIX: &str = " Underground Station";

#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    pub stop_id: String,
    pub station: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl From<TflStopPoint> for StationRow {
    fn from(stop: TflStopPoint) -> Self {
        let station = stop.commonName.unwrap_or_default();

        StationRow {
            stop_id: stop.naptanId.or(stop.id).unwrap_or_default(),
            station: strip_station_suffix(&station).to_string(),
            lat: stop.lat,
            lon: stop.lon,
        }
    }
}

/// Removes every trailing " Underground Station" from a TfL display name.
pub fn strip_station_suffix(mut name: &str) -> &str {
    while let Some(stripped) = name.strip_suffix(STATION_NAME_SUFFIX) {
        name = stripped;
    }
    name
}
