use serde::{Deserialize, Serialize};

use crate::locale::DEFAULT_LOCALE;

/// Which side of the amount the currency symbol is drawn on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    #[default]
    Start,
    End,
}

/// Construction-time settings for a [`MoneyInput`](crate::MoneyInput).
///
/// Every field has a default so a configuration file may list any subset:
///
/// ```toml
/// symbol = "€"
/// symbol_position = "end"
/// locale = "de-DE"
/// default_integer = "1500"
/// default_float = "5"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyInputConfig {
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    /// BCP-47 tag used for integer grouping.
    pub locale: String,
    /// Seed for the integer field. Zero or non-numeric seeds start empty.
    pub default_integer: String,
    /// Seed for the fraction field, see [`seed_fraction`](crate::format::seed_fraction).
    pub default_float: String,
}

impl Default for MoneyInputConfig {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Start,
            locale: DEFAULT_LOCALE.to_string(),
            default_integer: String::new(),
            default_float: String::new(),
        }
    }
}

impl MoneyInputConfig {
    pub fn symbol_at_end(&self) -> bool {
        self.symbol_position == SymbolPosition::End
    }
}
