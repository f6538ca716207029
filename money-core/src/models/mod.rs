mod config;
mod focus;
mod key;

pub use config::{MoneyInputConfig, SymbolPosition};
pub use focus::{EditOutcome, FocusRequest, FocusTarget};
pub use key::Key;
