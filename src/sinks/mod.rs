//! Writer sinks for log output

pub mod file;
pub mod memory;

pub use file::open_log_file;
pub use memory::SharedBuffer;
