use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Please enter a valid number!")]
    NotANumber { input: String },

    #[error("Quantity must be greater than zero!")]
    NotPositive { value: i64 },

    #[error("Capacity must be greater than zero!")]
    InvalidCapacity { value: i64 },

    #[error("Invalid option! Choose between 1 and 4.")]
    InvalidMenuChoice { value: i64 },

    #[error("Requested quantity ({requested}) exceeds the available seats ({available})!")]
    ExceedsAvailable { requested: u64, available: u64 },

    #[error("Requested quantity ({requested}) exceeds the existing reservations ({reserved})!")]
    ExceedsReserved { requested: u64, reserved: u64 },

    #[error("There are no more seats available for the event!")]
    SoldOut,

    #[error("There are no reservations to cancel!")]
    NothingToCancel,

    #[error("Initial reservations ({reserved}) exceed the capacity ({capacity})")]
    ReservedOverCapacity { capacity: u64, reserved: u64 },

    #[error("Input closed")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Text that is not an acceptable number for the prompt.
    Input,
    /// A request the current seat counts cannot satisfy.
    Capacity,
    Configuration,
    System,
}

impl ReservationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReservationError::NotANumber { .. }
            | ReservationError::NotPositive { .. }
            | ReservationError::InvalidCapacity { .. }
            | ReservationError::InvalidMenuChoice { .. } => ErrorCategory::Input,
            ReservationError::ExceedsAvailable { .. }
            | ReservationError::ExceedsReserved { .. }
            | ReservationError::SoldOut
            | ReservationError::NothingToCancel => ErrorCategory::Capacity,
            ReservationError::ConfigError { .. }
            | ReservationError::InvalidConfigValueError { .. }
            | ReservationError::ReservedOverCapacity { .. } => ErrorCategory::Configuration,
            ReservationError::IoError(_) | ReservationError::InputClosed => ErrorCategory::System,
        }
    }

    /// Whether a prompt should show this error and ask again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Input | ErrorCategory::Capacity
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Enter a whole number greater than zero",
            ErrorCategory::Capacity => "Check the event status (option 1) for the current counts",
            ErrorCategory::Configuration => {
                "Check the command-line flags and the config file values"
            }
            ErrorCategory::System => "Check that the terminal is still attached",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReservationError>;
