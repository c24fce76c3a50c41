pub mod http_api;
pub mod processor;
pub mod render;
pub mod settings;
pub mod shell;
