pub mod tfl_service_error;
pub mod tfl_stop_point;
