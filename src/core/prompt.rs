use crate::core::Terminal;
use crate::utils::error::{ReservationError, Result};

/// Options of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Status,
    Reserve,
    Cancel,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = ReservationError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(MenuChoice::Status),
            2 => Ok(MenuChoice::Reserve),
            3 => Ok(MenuChoice::Cancel),
            4 => Ok(MenuChoice::Exit),
            _ => Err(ReservationError::InvalidMenuChoice { value }),
        }
    }
}

pub fn parse_integer(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ReservationError::NotANumber {
            input: input.to_string(),
        })
}

pub fn positive_quantity(value: i64) -> Result<u64> {
    if value <= 0 {
        return Err(ReservationError::NotPositive { value });
    }
    Ok(value as u64)
}

pub fn positive_capacity(value: i64) -> Result<u64> {
    if value <= 0 {
        return Err(ReservationError::InvalidCapacity { value });
    }
    Ok(value as u64)
}

/// Asks for an integer until `accept` takes it.
///
/// Recoverable errors from reading, parsing or `accept` are shown and the prompt
/// repeats; anything else (closed input, I/O) is returned.
pub fn prompt_until<T, V, F>(terminal: &mut T, prompt: &str, mut accept: F) -> Result<V>
where
    T: Terminal + ?Sized,
    F: FnMut(i64) -> Result<V>,
{
    loop {
        let attempt = terminal
            .read_line(prompt)
            .and_then(|line| parse_integer(&line))
            .and_then(&mut accept);
        match attempt {
            Ok(value) => return Ok(value),
            Err(e) if e.is_recoverable() => {
                tracing::debug!(error = %e, "input rejected");
                terminal.write_line(&e.to_string())?;
            }
            Err(e) => return Err(e),
        }
    }
}
