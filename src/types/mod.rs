pub mod app_config;
pub mod station_row;
