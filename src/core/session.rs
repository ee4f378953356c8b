use crate::core::prompt::{self, MenuChoice};
use crate::core::render::Layout;
use crate::core::{ConfigProvider, Terminal};
use crate::domain::model::Event;
use crate::utils::error::{ReservationError, Result};

pub const CAPACITY_PROMPT: &str = "Enter the total capacity of the event: ";
pub const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";
pub const RESERVE_PROMPT: &str = "Enter the number of people to reserve seats for: ";
pub const CANCEL_PROMPT: &str = "Enter the number of people cancelling their reservation: ";

/// How a session loop finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked the exit option.
    Exited,
    InputClosed,
}

/// Interactive menu loop around one [`Event`].
pub struct ReservationSession<T: Terminal> {
    terminal: T,
    event: Event,
    layout: Layout,
}

impl<T: Terminal> ReservationSession<T> {
    /// Creates the event, asking for its capacity unless `config` has one.
    pub fn setup(mut terminal: T, config: &impl ConfigProvider) -> Result<Self> {
        let layout = Layout::new(config.rule_width());
        write_all(&mut terminal, layout.banner("Event Setup"))?;

        let capacity = match config.capacity() {
            Some(capacity) => capacity,
            None => {
                prompt::prompt_until(&mut terminal, CAPACITY_PROMPT, prompt::positive_capacity)?
            }
        };
        let event = Event::with_reserved(capacity, config.initial_reserved())?;
        tracing::info!(capacity, reserved = event.reserved(), "event created");

        terminal.write_line(&format!(
            "Event created successfully! Capacity: {} seats",
            capacity
        ))?;
        if event.reserved() > 0 {
            write_all(&mut terminal, Layout::counts(&event.status()))?;
        }
        write_all(&mut terminal, layout.section_end())?;

        Ok(Self {
            terminal,
            event,
            layout,
        })
    }

    /// Shows the menu and dispatches choices until exit or end of input.
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            let choice = match self.read_choice() {
                Ok(choice) => choice,
                Err(ReservationError::InputClosed) => {
                    tracing::info!(reserved = self.event.reserved(), "input closed, leaving");
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            };
            tracing::debug!(?choice, "menu choice");

            let outcome = match choice {
                MenuChoice::Status => self.show_status(),
                MenuChoice::Reserve => self.reserve(),
                MenuChoice::Cancel => self.cancel(),
                MenuChoice::Exit => {
                    self.farewell()?;
                    return Ok(SessionEnd::Exited);
                }
            };

            match outcome {
                Ok(()) => {}
                Err(ReservationError::InputClosed) => {
                    tracing::info!(reserved = self.event.reserved(), "input closed, leaving");
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn read_choice(&mut self) -> Result<MenuChoice> {
        let mut lines = self.layout.banner("Main Menu");
        lines.extend(
            [
                "Available options:",
                "  1. View event status",
                "  2. Make a reservation",
                "  3. Cancel a reservation",
                "  4. Exit the system",
            ]
            .map(String::from),
        );
        lines.extend(self.layout.section_end());
        write_all(&mut self.terminal, lines)?;

        let choice = prompt::prompt_until(&mut self.terminal, CHOICE_PROMPT, MenuChoice::try_from)?;
        write_all(&mut self.terminal, self.layout.section_end())?;
        Ok(choice)
    }

    pub fn show_status(&mut self) -> Result<()> {
        let status = self.event.status();
        let mut lines = self.layout.banner("Event Status");
        lines.push(format!("The event has {} seats in total:", status.capacity));
        if status.has_reservations() {
            lines.extend(Layout::counts(&status));
        } else {
            lines.push("No reservations registered yet!".to_string());
        }
        lines.extend(self.layout.section_end());
        write_all(&mut self.terminal, lines)
    }

    pub fn reserve(&mut self) -> Result<()> {
        if let Err(e) = self.event.ensure_can_reserve() {
            tracing::debug!(error = %e, "reservation refused");
            return self.report_refusal(&e);
        }

        let event = &mut self.event;
        let status = prompt::prompt_until(&mut self.terminal, RESERVE_PROMPT, |value| {
            let seats = prompt::positive_quantity(value)?;
            event.reserve(seats)
        })?;
        tracing::info!(
            reserved = status.reserved,
            available = status.available,
            "reservation completed"
        );

        let mut lines = vec!["Reservation completed successfully!".to_string()];
        lines.extend(Layout::counts(&status));
        lines.extend(self.layout.section_end());
        write_all(&mut self.terminal, lines)
    }

    pub fn cancel(&mut self) -> Result<()> {
        if let Err(e) = self.event.ensure_can_cancel() {
            tracing::debug!(error = %e, "cancellation refused");
            return self.report_refusal(&e);
        }

        let event = &mut self.event;
        let status = prompt::prompt_until(&mut self.terminal, CANCEL_PROMPT, |value| {
            let seats = prompt::positive_quantity(value)?;
            event.cancel(seats)
        })?;
        tracing::info!(
            reserved = status.reserved,
            available = status.available,
            "cancellation completed"
        );

        let mut lines = vec!["Cancellation completed successfully!".to_string()];
        lines.extend(Layout::counts(&status));
        lines.extend(self.layout.section_end());
        write_all(&mut self.terminal, lines)
    }

    fn report_refusal(&mut self, error: &ReservationError) -> Result<()> {
        let mut lines = vec![error.to_string()];
        lines.extend(self.layout.section_end());
        write_all(&mut self.terminal, lines)
    }

    fn farewell(&mut self) -> Result<()> {
        let mut lines = self.layout.banner("System Finished");
        lines.push("Thank you for using the Reservation System!".to_string());
        lines.push("Goodbye!".to_string());
        write_all(&mut self.terminal, lines)
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }
}

fn write_all<T: Terminal + ?Sized>(terminal: &mut T, lines: Vec<String>) -> Result<()> {
    for line in lines {
        terminal.write_line(&line)?;
    }
    Ok(())
}
