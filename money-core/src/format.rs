//! Pure derivations from the raw field state.
//!
//! Nothing here holds state except [`ValueEmitter`], which remembers the last
//! combined value handed to the host so re-derivations that produce the same
//! value stay silent.

use tracing::debug;

use crate::listener::ValueListener;
use crate::locale::LocaleSettings;

/// Maximum number of digits the fraction field keeps.
pub const FRACTION_DIGITS: usize = 2;

/// Removes every character that is not an ASCII digit.
///
/// Leading zeros are kept; the raw buffers hold digits exactly as typed.
///
/// ```
/// use money_core::format::sanitize_digits;
///
/// assert_eq!(sanitize_digits("$1,2a3"), "123");
/// assert_eq!(sanitize_digits("007"), "007");
/// ```
pub fn sanitize_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Truncates already-sanitized digits to the fraction width.
pub fn clamp_fraction(digits: &str) -> String {
    digits.chars().take(FRACTION_DIGITS).collect()
}

/// Seeds the fraction buffer from a default value.
///
/// `"0"` and the empty string seed an empty fraction, a single character is
/// kept, anything longer keeps its first two characters. `"00"` stays `"00"`.
///
/// ```
/// use money_core::format::seed_fraction;
///
/// assert_eq!(seed_fraction("0"), "");
/// assert_eq!(seed_fraction("5"), "5");
/// assert_eq!(seed_fraction("899"), "89");
/// ```
pub fn seed_fraction(value: &str) -> String {
    match value.len() {
        0 => String::new(),
        1 if value == "0" => String::new(),
        1 => value.to_string(),
        _ => clamp_fraction(value),
    }
}

/// Renders the raw integer digits with the locale's grouping.
///
/// Empty input renders as `"0"` and leading zeros are dropped, matching an
/// integer parse of the buffer. Grouping works on the digit string itself so
/// no length of input can overflow.
///
/// ```
/// use money_core::format::display_integer;
/// use money_core::locale::LocaleSettings;
///
/// let us = LocaleSettings::resolve("en-US");
/// assert_eq!(display_integer("1234567", &us), "1,234,567");
/// assert_eq!(display_integer("", &us), "0");
/// ```
pub fn display_integer(
    raw: &str,
    locale: &LocaleSettings,
) -> String {
    let digits = sanitize_digits(raw);
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return "0".to_string();
    }
    locale.group_digits(significant)
}

/// Zero-pads the fraction to two digits for display.
pub fn display_fraction(raw: &str) -> String {
    match raw.len() {
        0 => "00".to_string(),
        1 => format!("0{raw}"),
        _ => raw.to_string(),
    }
}

/// Builds the canonical value reported to the host.
///
/// ```
/// use money_core::format::combined_value;
///
/// assert_eq!(combined_value("12", ""), "12");
/// assert_eq!(combined_value("12", "5"), "12.05");
/// assert_eq!(combined_value("12", "50"), "12.50");
/// ```
pub fn combined_value(
    raw_integer: &str,
    raw_fraction: &str,
) -> String {
    if raw_fraction.is_empty() {
        raw_integer.to_string()
    } else {
        format!("{raw_integer}.{}", display_fraction(raw_fraction))
    }
}

/// Forwards combined values to a listener, skipping repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueEmitter {
    last: String,
}

impl ValueEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value most recently passed to the listener (empty before the first
    /// emission).
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Notifies `listener` when `value` differs from the previous emission.
    ///
    /// Returns the emitted value, or `None` when nothing changed.
    pub fn emit<L: ValueListener + ?Sized>(
        &mut self,
        value: String,
        listener: &mut L,
    ) -> Option<String> {
        if self.last == value {
            return None;
        }
        debug!(previous = %self.last, value = %value, "combined value changed");
        listener.value_changed(&value);
        self.last = value.clone();
        Some(value)
    }
}
