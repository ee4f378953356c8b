pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{ReservationError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::{LogFormat, TomlConfig, DEFAULT_RULE_WIDTH};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "event-reservations")]
#[command(about = "Reserve and cancel seats for a single event from the terminal")]
pub struct CliConfig {
    /// Event capacity; skips the capacity prompt
    #[arg(long)]
    pub capacity: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file named by `--config`, if any.
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                validation::validate_path("config", path)?;
                TomlConfig::from_file(path).map(Some)
            }
            None => Ok(None),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(capacity) = self.capacity {
            validation::validate_positive_number("capacity", capacity, 1)?;
        }
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}

/// Command-line flags merged over the optional config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub capacity: Option<u64>,
    pub initial_reserved: u64,
    pub rule_width: usize,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: None,
            initial_reserved: 0,
            rule_width: DEFAULT_RULE_WIDTH,
            verbose: false,
            log_level: None,
            log_format: LogFormat::Compact,
        }
    }
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Result<Self> {
        cli.validate()?;
        if let Some(file) = file {
            file.validate()?;
        }

        let settings = Self {
            capacity: cli.capacity.or_else(|| file.and_then(|f| f.capacity())),
            initial_reserved: file.map(|f| f.initial_reserved()).unwrap_or(0),
            rule_width: file.map(|f| f.rule_width()).unwrap_or(DEFAULT_RULE_WIDTH),
            verbose: cli.verbose,
            log_level: file.and_then(|f| f.log_level()).map(str::to_string),
            log_format: file.map(|f| f.log_format()).unwrap_or_default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        match self.capacity {
            Some(capacity) if self.initial_reserved > capacity => {
                Err(ReservationError::InvalidConfigValueError {
                    field: "event.reserved".to_string(),
                    value: self.initial_reserved.to_string(),
                    reason: format!("Cannot exceed the capacity ({})", capacity),
                })
            }
            None if self.initial_reserved > 0 => Err(ReservationError::ConfigError {
                message: "event.reserved requires a capacity from --capacity or event.capacity"
                    .to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl ConfigProvider for Settings {
    fn capacity(&self) -> Option<u64> {
        self.capacity
    }

    fn initial_reserved(&self) -> u64 {
        self.initial_reserved
    }

    fn rule_width(&self) -> usize {
        self.rule_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = CliConfig::try_parse_from([
            "event-reservations",
            "--capacity",
            "25",
            "--config",
            "event.toml",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.capacity, Some(25));
        assert_eq!(cli.config.as_deref(), Some("event.toml"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_no_flags_prompts_for_capacity() {
        let cli = CliConfig::try_parse_from(["event-reservations"]).unwrap();
        let settings = Settings::resolve(&cli, None).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.capacity(), None);
    }

    #[test]
    fn test_flag_capacity_overrides_file() {
        let cli = CliConfig {
            capacity: Some(50),
            ..Default::default()
        };
        let file = TomlConfig::from_toml_str(
            "[event]\ncapacity = 10\nreserved = 4\n\n[display]\nrule_width = 40\n",
        )
        .unwrap();

        let settings = Settings::resolve(&cli, Some(&file)).unwrap();
        assert_eq!(settings.capacity, Some(50));
        assert_eq!(settings.initial_reserved, 4);
        assert_eq!(settings.rule_width, 40);
    }

    #[test]
    fn test_zero_capacity_flag_is_rejected() {
        let cli = CliConfig {
            capacity: Some(0),
            ..Default::default()
        };
        assert!(Settings::resolve(&cli, None).is_err());
    }

    #[test]
    fn test_flag_capacity_below_file_reservations_is_rejected() {
        let cli = CliConfig {
            capacity: Some(3),
            ..Default::default()
        };
        let file = TomlConfig::from_toml_str("[event]\ncapacity = 10\nreserved = 4\n").unwrap();

        let err = Settings::resolve(&cli, Some(&file)).unwrap_err();
        assert!(matches!(err, ReservationError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_reservations_without_capacity_are_rejected() {
        let file = TomlConfig::from_toml_str("[event]\nreserved = 2\n").unwrap();
        let err = Settings::resolve(&CliConfig::default(), Some(&file)).unwrap_err();
        assert!(matches!(err, ReservationError::ConfigError { .. }));
    }
}
