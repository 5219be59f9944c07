pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod parser;
pub mod time;

/// Debug-level logger for test harnesses; repeated calls are ignored.
pub fn init_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

// Re-export commonly used types
pub use config::Config;
pub use error::{FieldError, TimeError};
pub use field::{TimeField, TimeInput};
pub use parser::{parse, parse_time};
pub use time::{Meridiem, ParsedTime};
