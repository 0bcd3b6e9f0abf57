#![allow(non_snake_case)]
use serde::Serialize;
use serde_json::Value;

/// Type tag TfL uses for underground rail stations.
pub const METRO_STATION_TYPE: &str = "NaptanMetroStation";

#[derive(Serialize, Default, Debug, Clone, PartialEq)]
pub struct TflStopPoint {
    pub naptanId: Option<String>,
    pub id: Option<String>,
    pub stopType: Option<String>,
    pub commonName: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl TflStopPoint {
    /// Best-effort key lookup. Keys that are missing or of the wrong JSON type
    /// come back as `None` instead of failing the whole record.
    pub fn from_json(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_string);
        let number = |key: &str| record.get(key).and_then(Value::as_f64);

        Some(TflStopPoint {
            naptanId: text("naptanId"),
            id: text("id"),
            stopType: text("stopType"),
            commonName: text("commonName"),
            lat: number("lat"),
            lon: number("lon"),
        })
    }

    pub fn is_metro_station(&self) -> bool {
        self.stopType.as_deref() == Some(METRO_STATION_TYPE)
    }
}
