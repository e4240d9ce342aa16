//! Runtime configuration for hosting the bot.
//!
//! Values come from environment variables (a `.env` file is honoured by the
//! binary), and command-line flags override them.

use alloc::format;
use alloc::string::String;
use core::fmt::Display;
use core::str::FromStr;
use core::time::Duration;

use crate::options::{DEFAULT_STARTING_BALANCE, GameOptions};

/// Sender address used for stdin lines without an explicit `@address`.
pub const DEFAULT_SENDER: &str = "local";

/// Store handle used when `BJ_STORE_URL` is unset.
pub const DEFAULT_STORE_URL: &str = "memory://";

/// Complete bot configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Balance for new and restarted sessions.
    pub starting_balance: usize,
    /// Seed for the card source. `None` picks one at startup.
    pub seed: Option<u64>,
    /// Default sender address.
    pub sender: String,
    /// Key-value store handle handed to the background task.
    pub store_url: String,
    /// Period of the background task.
    pub tick: Duration,
}

/// Values given on the command line. `None` falls back to the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `--balance`
    pub starting_balance: Option<usize>,
    /// `--seed`
    pub seed: Option<u64>,
    /// `--sender`
    pub sender: Option<String>,
}

impl ChatConfig {
    /// Loads configuration from environment variables, applying `overrides`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// result fails [`ChatConfig::validate`].
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let starting_balance = match overrides.starting_balance {
            Some(balance) => balance,
            None => parse_env_or("BJ_STARTING_BALANCE", DEFAULT_STARTING_BALANCE)?,
        };

        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => parse_env("BJ_SEED")?,
        };

        let sender = overrides
            .sender
            .or_else(|| std::env::var("BJ_SENDER").ok())
            .unwrap_or_else(|| DEFAULT_SENDER.into());

        let store_url =
            std::env::var("BJ_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.into());

        let tick = Duration::from_secs(parse_env_or("BJ_TICK_SECS", 60)?);

        let config = Self {
            starting_balance,
            seed,
            sender,
            store_url,
            tick,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending variable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_balance == 0 {
            return Err(ConfigError::Invalid {
                var: "BJ_STARTING_BALANCE".into(),
                reason: "Must be greater than 0".into(),
            });
        }

        if self.tick.is_zero() {
            return Err(ConfigError::Invalid {
                var: "BJ_TICK_SECS".into(),
                reason: "Must be greater than 0".into(),
            });
        }

        if self.sender.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "BJ_SENDER".into(),
                reason: "Must not be empty".into(),
            });
        }

        Ok(())
    }

    /// Engine options derived from this configuration.
    #[must_use]
    pub const fn game_options(&self) -> GameOptions {
        GameOptions {
            starting_balance: self.starting_balance,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is present but malformed.
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid {
        /// Variable name.
        var: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Parses `key` if it is set.
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|err: T::Err| ConfigError::Invalid {
                var: key.into(),
                reason: format!("{raw:?}: {err}"),
            }),
        Err(_) => Ok(None),
    }
}

/// Parses `key`, falling back to `default` when it is unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    Ok(parse_env(key)?.unwrap_or(default))
}
