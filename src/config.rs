//! Configuration management for the contact book assistant.
//!
//! Settings come from environment variables (optionally via a `.env` file)
//! and can be overridden by command-line flags.

use crate::book::{BirthdayPolicy, DEFAULT_BIRTHDAY_POLICY};
use crate::error::{ConfigError, ConfigResult};
use clap::Parser;
use std::env;

/// Longest birthday window accepted, one leap year.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Window and year-end handling for the `birthdays` command
    pub birthday_policy: BirthdayPolicy,

    /// How many similar names to offer when a lookup misses (default: 3)
    pub max_name_suggestions: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: days to look ahead (default: 7, max: 366)
    /// - `BIRTHDAY_WRAP_YEAR_END`: look into next January near year end (default: false)
    /// - `MAX_NAME_SUGGESTIONS`: similar names offered on a miss (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy never prints, which keeps stdout for the dialogue
        let _ = dotenvy::dotenv();

        let window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_POLICY.window_days)?;
        Self::validate_window_days("BIRTHDAY_WINDOW_DAYS", window_days)?;

        let wrap_year_end =
            Self::parse_env_bool("BIRTHDAY_WRAP_YEAR_END", DEFAULT_BIRTHDAY_POLICY.wrap_year_end)?;
        let max_name_suggestions = Self::parse_env_usize("MAX_NAME_SUGGESTIONS", 3)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_policy: BirthdayPolicy {
                window_days,
                wrap_year_end,
            },
            max_name_suggestions,
            log_level,
        })
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn with_args(mut self, args: &CliArgs) -> ConfigResult<Self> {
        if let Some(days) = args.window_days {
            Self::validate_window_days("--window-days", days)?;
            self.birthday_policy.window_days = days;
        }
        if let Some(wrap) = args.wrap_year_end {
            self.birthday_policy.wrap_year_end = wrap;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        Ok(self)
    }

    fn validate_window_days(var: &str, days: u32) -> ConfigResult<()> {
        if days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_policy: DEFAULT_BIRTHDAY_POLICY,
            max_name_suggestions: 3,
            log_level: "error".to_string(),
        }
    }
}

/// Command-line flags.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "contact-book", version, about = "Contact book assistant bot")]
pub struct CliArgs {
    /// Days ahead to look for birthdays (overrides BIRTHDAY_WINDOW_DAYS)
    #[arg(long)]
    pub window_days: Option<u32>,

    /// Include early-January birthdays when run at the end of December
    /// (overrides BIRTHDAY_WRAP_YEAR_END; `--wrap-year-end=false` turns it off)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub wrap_year_end: Option<bool>,

    /// Log filter for stderr, e.g. "debug" (overrides LOG_LEVEL)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.birthday_policy, DEFAULT_BIRTHDAY_POLICY);
        assert_eq!(config.max_name_suggestions, 3);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("BIRTHDAY_WRAP_YEAR_END", "yes");
        guard.set("MAX_NAME_SUGGESTIONS", "5");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_policy.window_days, 14);
        assert!(config.birthday_policy.wrap_year_end);
        assert_eq!(config.max_name_suggestions, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_window_too_large() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "400");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "seven");

        assert!(Config::parse_env_u32("TEST_U32_INVALID", 7).is_err());
        assert_eq!(Config::parse_env_u32("NONEXISTENT_U32", 7).unwrap(), 7);
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_TRUE", "TRUE");
        guard.set("TEST_BOOL_OFF", "off");
        guard.set("TEST_BOOL_BAD", "maybe");

        assert!(Config::parse_env_bool("TEST_BOOL_TRUE", false).unwrap());
        assert!(!Config::parse_env_bool("TEST_BOOL_OFF", true).unwrap());
        assert!(Config::parse_env_bool("TEST_BOOL_BAD", false).is_err());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
    }

    #[test]
    fn test_args_override_config() {
        let args = CliArgs::parse_from([
            "contact-book",
            "--window-days",
            "10",
            "--wrap-year-end",
            "--log-level",
            "info",
        ]);
        let config = Config::default().with_args(&args).unwrap();
        assert_eq!(config.birthday_policy.window_days, 10);
        assert!(config.birthday_policy.wrap_year_end);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_args_turn_wrap_off() {
        let mut config = Config::default();
        config.birthday_policy.wrap_year_end = true;

        let args = CliArgs::parse_from(["contact-book", "--wrap-year-end=false"]);
        let config = config.with_args(&args).unwrap();
        assert!(!config.birthday_policy.wrap_year_end);
    }

    #[test]
    #[serial]
    fn test_args_override_env_wrap() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WRAP_YEAR_END", "true");

        let args = CliArgs::parse_from(["contact-book", "--wrap-year-end=false"]);
        let config = Config::from_env().unwrap().with_args(&args).unwrap();
        assert!(!config.birthday_policy.wrap_year_end);

        let args = CliArgs::parse_from(["contact-book"]);
        let config = Config::from_env().unwrap().with_args(&args).unwrap();
        assert!(config.birthday_policy.wrap_year_end);
    }

    #[test]
    fn test_args_reject_large_window() {
        let args = CliArgs::parse_from(["contact-book", "--window-days", "1000"]);
        assert!(Config::default().with_args(&args).is_err());
    }

    #[test]
    fn test_no_args_keep_config() {
        let args = CliArgs::parse_from(["contact-book"]);
        let config = Config::default().with_args(&args).unwrap();
        assert_eq!(config, Config::default());
    }
}
