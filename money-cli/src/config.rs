//! Loading [`MoneyInputConfig`] from TOML plus command-line overrides.

use std::path::Path;

use clap::ValueEnum;
use money_core::{MoneyInputConfig, SymbolPosition};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Command-line spelling of [`SymbolPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SymbolSide {
    Start,
    End,
}

impl From<SymbolSide> for SymbolPosition {
    fn from(side: SymbolSide) -> Self {
        match side {
            SymbolSide::Start => SymbolPosition::Start,
            SymbolSide::End => SymbolPosition::End,
        }
    }
}

/// Values given on the command line; each one replaces the file's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub symbol: Option<String>,
    pub symbol_position: Option<SymbolPosition>,
    pub locale: Option<String>,
    pub default_integer: Option<String>,
    pub default_float: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(
        self,
        mut config: MoneyInputConfig,
    ) -> MoneyInputConfig {
        if let Some(symbol) = self.symbol {
            config.symbol = symbol;
        }
        if let Some(position) = self.symbol_position {
            config.symbol_position = position;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(default_integer) = self.default_integer {
            config.default_integer = default_integer;
        }
        if let Some(default_float) = self.default_float {
            config.default_float = default_float;
        }
        config
    }
}

pub fn parse_config(input: &str) -> Result<MoneyInputConfig, ConfigError> {
    Ok(toml::from_str(input)?)
}

/// Reads the config file when one is given, otherwise starts from defaults.
pub fn load_config(path: Option<&Path>) -> Result<MoneyInputConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(MoneyInputConfig::default());
    };

    debug!(path = %path.display(), "loading config");
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&contents)
}
