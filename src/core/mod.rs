pub mod prompt;
pub mod render;
pub mod session;

pub use crate::domain::model::{Event, EventStatus};
pub use crate::domain::ports::{ConfigProvider, Terminal};
pub use crate::utils::error::Result;
