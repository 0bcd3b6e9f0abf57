pub mod tfl_client;
