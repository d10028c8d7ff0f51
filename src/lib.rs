pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::ToolboxConfig};

pub use core::calendar::{
    convert_edit, format_calendar_date, parse_calendar_date, Calendar, CalendarDate, DatePair,
};
pub use core::history::History;
pub use core::id_code::{check_id_code, generate_id_code, validate_id_code, Gender};
pub use utils::error::{Result, ToolError};
