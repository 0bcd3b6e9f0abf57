pub mod tfl_service;
pub mod types;
