use tracing::{debug, error, info};

use crate::{
    services::tfl_client::tfl_service::TflService,
    types::app_config::AppConfig,
    utils::{
        app_error::AppError,
        spreadsheet::write_station_rows,
        station_rows::{extract_station_rows, stop_point_records},
    },
};

#[derive(Debug, PartialEq)]
pub struct RunSummary {
    pub fetched: usize,
    pub stations: usize,
    pub saved: bool,
}

/// Fetches the tube stop points once, keeps the stations and writes them out.
///
/// A failed fetch aborts the run. A failed write is logged and reported
/// through `RunSummary::saved`.
pub async fn run(config: &AppConfig) -> Result<RunSummary, AppError> {
    let config = config.clone().validated()?;
    let tfl_service = TflService::new(config.tfl_service_config());

    info!("Fetching stop points from {}", config.stop_points_url);
    let response = tfl_service.get_stop_points().await?;

    let fetched = stop_point_records(&response).len();
    let rows = extract_station_rows(&response);
    info!("Found {} underground stations in {} stop points", rows.len(), fetched);

    for row in rows.iter().take(5) {
        debug!(stop_id = %row.stop_id, station = %row.station, lat = ?row.lat, lon = ?row.lon);
    }

    let path = config.output_path();
    let saved = match write_station_rows(path, &rows) {
        Ok(()) => {
            info!("Saved {} stations to {}", rows.len(), path.display());
            true
        }
        Err(e) => {
            error!("Failed to write station info: {}", e);
            false
        }
    };

    Ok(RunSummary {
        fetched,
        stations: rows.len(),
        saved,
    })
}
