use crate::core::ConfigProvider;
use crate::utils::error::{ReservationError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_RULE_WIDTH: usize = 100;
pub const MIN_RULE_WIDTH: usize = 20;
pub const MAX_RULE_WIDTH: usize = 200;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub event: EventConfig,
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventConfig {
    pub capacity: Option<u64>,
    pub reserved: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub rule_width: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReservationError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReservationError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EVENT_CAPACITY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReservationError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(capacity) = self.event.capacity {
            validation::validate_positive_number("event.capacity", capacity, 1)?;
        }

        if let (Some(capacity), Some(reserved)) = (self.event.capacity, self.event.reserved) {
            if reserved > capacity {
                return Err(ReservationError::InvalidConfigValueError {
                    field: "event.reserved".to_string(),
                    value: reserved.to_string(),
                    reason: format!("Cannot exceed event.capacity ({})", capacity),
                });
            }
        }

        if let Some(width) = self.display.as_ref().and_then(|d| d.rule_width) {
            validation::validate_range(
                "display.rule_width",
                width,
                MIN_RULE_WIDTH,
                MAX_RULE_WIDTH,
            )?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_one_of(
                "logging.level",
                level,
                &["trace", "debug", "info", "warn", "error", "off"],
            )?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn capacity(&self) -> Option<u64> {
        self.event.capacity
    }

    fn initial_reserved(&self) -> u64 {
        self.event.reserved.unwrap_or(0)
    }

    fn rule_width(&self) -> usize {
        self.display
            .as_ref()
            .and_then(|d| d.rule_width)
            .unwrap_or(DEFAULT_RULE_WIDTH)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
