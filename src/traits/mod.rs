pub mod file_api;
pub mod output_sink;
