use serde_json::Value;

use crate::{
    services::tfl_client::types::tfl_stop_point::TflStopPoint, types::station_row::StationRow,
};

/// Returns the StopPoint records of a TfL response, which is either a bare
/// array or an object carrying a `stopPoints` array.
pub fn stop_point_records(response: &Value) -> &[Value] {
    match response {
        Value::Array(records) => records,
        Value::Object(body) => body
            .get("stopPoints")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    }
}

/// One row per underground station, in response order.
pub fn extract_station_rows(response: &Value) -> Vec<StationRow> {
    stop_point_records(response)
        .iter()
        .filter_map(TflStopPoint::from_json)
        .filter(TflStopPoint::is_metro_station)
        .map(StationRow::from)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use serde::Serialize;
    use serde_json::json;

    use crate::types::station_row::{strip_station_suffix, STATION_NAME_SUFFIX};

    use super::*;

    #[derive(Serialize)]
    struct TflStopPointsResponse {
        stopPoints: Vec<TflStopPoint>,
    }

    fn stop(id: &str, stop_type: &str, name: &str) -> TflStopPoint {
        TflStopPoint {
            naptanId: Some(id.to_string()),
            stopType: Some(stop_type.to_string()),
            commonName: Some(name.to_string()),
            lat: Some(51.5),
            lon: Some(-0.1),
            ..Default::default()
        }
    }

    #[test]
    fn keeps_only_metro_stations_in_order() {
        let response = serde_json::to_value(vec![
            stop("940GZZLUBST", "NaptanMetroStation", "Baker Street Underground Station"),
            stop("490G00005678", "NaptanPublicBusCoachTram", "Baker Street Station"),
            stop("940GZZLUACT", "NaptanMetroStation", "Acton Town Underground Station"),
            stop("9400ZZLUBST1", "NaptanMetroEntrance", "Baker Street Underground Station"),
            stop("940GZZLUWLO", "NaptanMetroStation", "Waterloo Underground Station"),
        ])
        .unwrap();

        let rows = extract_station_rows(&response);

        let ids: Vec<&str> = rows.iter().map(|r| r.stop_id.as_str()).collect();
        assert_eq!(ids, vec!["940GZZLUBST", "940GZZLUACT", "940GZZLUWLO"]);
        let names: Vec<&str> = rows.iter().map(|r| r.station.as_str()).collect();
        assert_eq!(names, vec!["Baker Street", "Acton Town", "Waterloo"]);
    }

    #[test]
    fn reads_stop_points_response_object() {
        let response = serde_json::to_value(TflStopPointsResponse {
            stopPoints: vec![
                stop("940GZZLUBNK", "NaptanMetroStation", "Bank Underground Station"),
                stop("HUBBAN", "TransportInterchange", "Bank"),
            ],
        })
        .unwrap();

        let rows = extract_station_rows(&response);

        assert_eq!(
            rows,
            vec![StationRow {
                stop_id: "940GZZLUBNK".to_string(),
                station: "Bank".to_string(),
                lat: Some(51.5),
                lon: Some(-0.1),
            }]
        );
    }

    #[test]
    fn station_names_never_keep_suffix() {
        let response = json!([
            { "naptanId": "a", "stopType": "NaptanMetroStation", "commonName": "Bank Underground Station" },
            { "naptanId": "b", "stopType": "NaptanMetroStation", "commonName": "Paddington (H&C Line)-Underground" },
            { "naptanId": "c", "stopType": "NaptanMetroStation", "commonName": "Underground Station Road" },
            { "naptanId": "d", "stopType": "NaptanMetroStation", "commonName": " Underground Station Underground Station" }
        ]);

        let rows = extract_station_rows(&response);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].station, "Bank");
        assert_eq!(rows[1].station, "Paddington (H&C Line)-Underground");
        assert_eq!(rows[2].station, "Underground Station Road");
        assert_eq!(rows[3].station, "");
        assert!(rows
            .iter()
            .all(|r| !r.station.ends_with(STATION_NAME_SUFFIX)));
    }

    #[test]
    fn missing_fields_are_best_effort() {
        let response = json!([
            { "id": "940GZZLUEUS", "stopType": "NaptanMetroStation" },
            { "stopType": "NaptanMetroStation", "commonName": "Euston Underground Station", "lat": "n/a" },
            { "commonName": "No Type Underground Station" },
            "NaptanMetroStation",
            null
        ]);

        let rows = extract_station_rows(&response);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].stop_id, "940GZZLUEUS");
        assert_eq!(rows[0].station, "");
        assert_eq!(rows[1].stop_id, "");
        assert_eq!(rows[1].station, "Euston");
        assert_eq!(rows[1].lat, None);
    }

    #[test]
    fn unexpected_shapes_yield_no_rows() {
        assert!(extract_station_rows(&json!([])).is_empty());
        assert!(extract_station_rows(&json!({ "stopPoints": "none" })).is_empty());
        assert!(extract_station_rows(&json!({ "message": "rate limited" })).is_empty());
        assert!(extract_station_rows(&json!(42)).is_empty());
    }

    #[test]
    fn suffix_only_stripped_at_end() {
        assert_eq!(strip_station_suffix("Oval Underground Station"), "Oval");
        assert_eq!(strip_station_suffix("Oval"), "Oval");
        assert_eq!(
            strip_station_suffix("Oval Underground Station Underground Station"),
            "Oval"
        );
        assert_eq!(strip_station_suffix("Underground Station"), "Underground Station");
    }
}
