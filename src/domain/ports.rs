use crate::utils::error::Result;

/// Line-oriented interactive terminal.
pub trait Terminal {
    /// Shows `prompt` and reads one line without its trailing newline.
    /// Returns `ReservationError::InputClosed` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait ConfigProvider {
    /// Capacity supplied up front; `None` means ask for it.
    fn capacity(&self) -> Option<u64>;
    fn initial_reserved(&self) -> u64;
    fn rule_width(&self) -> usize;
}
