pub mod console;
pub mod file;
pub mod slot;
pub mod utils;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use slot::OutputSlot;
pub use crate::traits::output_sink::OutputSink;
