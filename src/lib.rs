pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LineTerminal, toml_config::TomlConfig, CliConfig, Settings};
pub use core::session::{ReservationSession, SessionEnd};
pub use domain::model::{Event, EventStatus};
pub use utils::error::{ReservationError, Result};
