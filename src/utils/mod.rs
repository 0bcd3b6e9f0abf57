pub mod app_error;
pub mod spreadsheet;
pub mod station_rows;
