//! State machine and formatting for a two-field currency amount input.
//!
//! The integer part and the two-digit fraction are edited as separate text
//! fields. [`MoneyInput`] keeps both raw buffers, derives the locale-grouped
//! display and reports a single canonical decimal string such as
//! `"1234567.89"` to a [`ValueListener`] whenever it changes.

pub mod controller;
pub mod error;
pub mod format;
pub mod listener;
pub mod locale;
pub mod models;

pub use controller::{MoneyDisplay, MoneyInput};
pub use error::AmountError;
pub use listener::{RecordingListener, ValueListener};
pub use locale::LocaleSettings;
pub use models::*;
