use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;

use crate::types::station_row::StationRow;

pub const STATION_COLUMNS: [&str; 4] = ["stop_id", "station", "lat", "lon"];

#[derive(Debug, Error)]
pub enum SpreadsheetError {
    #[error("Failed to fill worksheet: {0}")]
    Worksheet(#[from] XlsxError),

    #[error("Failed to save {}: {source}", .path.display())]
    Save { path: PathBuf, source: XlsxError },
}

/// Writes the rows to an xlsx file at `path`, replacing any existing file.
/// The first row holds the column names. Missing coordinates are left blank.
pub fn write_station_rows(path: &Path, rows: &[StationRow]) -> Result<(), SpreadsheetError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in STATION_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let line = index as u32 + 1;

        worksheet.write_string(line, 0, &row.stop_id)?;
        worksheet.write_string(line, 1, &row.station)?;
        if let Some(lat) = row.lat {
            worksheet.write_number(line, 2, lat)?;
        }
        if let Some(lon) = row.lon {
            worksheet.write_number(line, 3, lon)?;
        }
    }

    workbook.save(path).map_err(|source| SpreadsheetError::Save {
        path: path.to_path_buf(),
        source,
    })
}
