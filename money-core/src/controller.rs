//! Two-field amount entry: the integer part and a two-digit fraction.
//!
//! [`MoneyInput`] owns the raw digit buffers and the focus target. Every
//! handler mutates raw state, re-derives the display strings and hands the
//! combined value to the listener when it changed. Focus moves are returned
//! to the caller as [`FocusRequest`]s instead of being applied to a UI.

use std::fmt;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::AmountError;
use crate::format::{
    ValueEmitter, clamp_fraction, combined_value, display_fraction, display_integer,
    sanitize_digits, seed_fraction,
};
use crate::listener::ValueListener;
use crate::locale::LocaleSettings;
use crate::models::{EditOutcome, FocusRequest, FocusTarget, Key, MoneyInputConfig, SymbolPosition};

/// State and event handlers for a single money input.
pub struct MoneyInput<L: ValueListener> {
    symbol: String,
    symbol_position: SymbolPosition,
    locale: LocaleSettings,
    raw_integer: String,
    raw_fraction: String,
    display_integer: String,
    focus: FocusTarget,
    emitter: ValueEmitter,
    listener: L,
}

impl<L: ValueListener> MoneyInput<L> {
    /// Seeds the fields from `config` and emits the seeded value if it is
    /// not empty.
    pub fn new(
        config: MoneyInputConfig,
        listener: L,
    ) -> Self {
        let locale = LocaleSettings::resolve(&config.locale);
        let raw_integer = seed_integer(&config.default_integer);
        let raw_fraction = seed_fraction(&sanitize_digits(&config.default_float));
        let display_integer = display_integer(&raw_integer, &locale);

        let mut input = Self {
            symbol: config.symbol,
            symbol_position: config.symbol_position,
            locale,
            raw_integer,
            raw_fraction,
            display_integer,
            focus: FocusTarget::Integer,
            emitter: ValueEmitter::new(),
            listener,
        };
        input.sync();
        input
    }

    pub fn raw_integer(&self) -> &str {
        &self.raw_integer
    }

    pub fn raw_fraction(&self) -> &str {
        &self.raw_fraction
    }

    pub fn display_integer(&self) -> &str {
        &self.display_integer
    }

    pub fn display_fraction(&self) -> String {
        display_fraction(&self.raw_fraction)
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn locale(&self) -> &LocaleSettings {
        &self.locale
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// The canonical value, e.g. `"1234.05"`.
    pub fn value(&self) -> String {
        combined_value(&self.raw_integer, &self.raw_fraction)
    }

    /// The canonical value as a [`Decimal`]. An empty value is zero.
    pub fn to_decimal(&self) -> Result<Decimal, AmountError> {
        let value = self.value();
        let normalized = match value.as_str() {
            "" => return Ok(Decimal::ZERO),
            v if v.starts_with('.') => format!("0{v}"),
            v => v.to_string(),
        };
        normalized.parse().map_err(|source| AmountError {
            input: value,
            source,
        })
    }

    /// Full-content change reported by the integer field.
    pub fn integer_changed(
        &mut self,
        text: &str,
    ) -> EditOutcome {
        if text.contains([',', '.']) {
            debug!(text, "decimal separator typed, moving to fraction");
            self.raw_fraction.clear();
            let focus = self.move_focus(FocusRequest::anywhere(FocusTarget::Fraction));
            return EditOutcome {
                focus: Some(focus),
                emitted: self.sync(),
            };
        }

        self.raw_integer = sanitize_digits(text);
        EditOutcome {
            focus: None,
            emitted: self.sync(),
        }
    }

    /// Full-content change reported by the fraction field.
    pub fn fraction_changed(
        &mut self,
        text: &str,
    ) -> EditOutcome {
        self.raw_fraction = clamp_fraction(&sanitize_digits(text));
        EditOutcome {
            focus: None,
            emitted: self.sync(),
        }
    }

    /// Key press on the integer field. Backspace on an empty integer clears
    /// the fraction.
    pub fn integer_key(
        &mut self,
        key: &Key,
    ) -> EditOutcome {
        if *key != Key::Backspace || !self.raw_integer.is_empty() {
            trace!(?key, "integer key ignored");
            return EditOutcome::default();
        }

        debug!("backspace on empty integer, clearing fraction");
        self.raw_fraction.clear();
        EditOutcome {
            focus: None,
            emitted: self.sync(),
        }
    }

    /// Key press on the fraction field. Backspace on an empty fraction
    /// deletes the last integer digit and returns to the integer field.
    pub fn fraction_key(
        &mut self,
        key: &Key,
    ) -> EditOutcome {
        if *key != Key::Backspace || !self.raw_fraction.is_empty() {
            trace!(?key, "fraction key ignored");
            return EditOutcome::default();
        }

        self.raw_integer.pop();
        debug!(integer = %self.raw_integer, "backspace on empty fraction, back to integer");
        let focus = self.move_focus(FocusRequest::at_end(
            FocusTarget::Integer,
            self.raw_integer.len(),
        ));
        EditOutcome {
            focus: Some(focus),
            emitted: self.sync(),
        }
    }

    /// Tap on the integer display. The caret always lands at the end so it
    /// cannot sit inside the grouped rendering.
    pub fn tap_integer(&mut self) -> FocusRequest {
        self.move_focus(FocusRequest::at_end(
            FocusTarget::Integer,
            self.raw_integer.len(),
        ))
    }

    pub fn tap_fraction(&mut self) -> FocusRequest {
        self.move_focus(FocusRequest::anywhere(FocusTarget::Fraction))
    }

    /// Switches the grouping locale. Only the integer display changes.
    pub fn set_locale(
        &mut self,
        tag: &str,
    ) {
        self.locale = LocaleSettings::resolve(tag);
        self.display_integer = display_integer(&self.raw_integer, &self.locale);
    }

    /// Re-runs the derivations without touching raw state.
    pub fn refresh(&mut self) -> Option<String> {
        self.sync()
    }

    pub fn snapshot(&self) -> MoneyDisplay {
        MoneyDisplay {
            symbol: self.symbol.clone(),
            symbol_position: self.symbol_position,
            integer: self.display_integer.clone(),
            decimal_mark: self.locale.decimal_mark,
            fraction: self.display_fraction(),
        }
    }

    fn move_focus(
        &mut self,
        request: FocusRequest,
    ) -> FocusRequest {
        self.focus = request.target;
        request
    }

    fn sync(&mut self) -> Option<String> {
        self.display_integer = display_integer(&self.raw_integer, &self.locale);
        let value = combined_value(&self.raw_integer, &self.raw_fraction);
        self.emitter.emit(value, &mut self.listener)
    }
}

impl<L: ValueListener> fmt::Debug for MoneyInput<L> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("MoneyInput")
            .field("locale", &self.locale.tag)
            .field("raw_integer", &self.raw_integer)
            .field("raw_fraction", &self.raw_fraction)
            .field("focus", &self.focus)
            .field("last_emitted", &self.emitter.last())
            .finish()
    }
}

/// Integer seeds that are empty or numerically zero start the field empty.
fn seed_integer(default: &str) -> String {
    let digits = sanitize_digits(default);
    if digits.bytes().all(|b| b == b'0') {
        String::new()
    } else {
        digits
    }
}

/// Rendered form of the input: symbol, grouped integer and padded fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyDisplay {
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    pub integer: String,
    pub decimal_mark: char,
    pub fraction: String,
}

impl fmt::Display for MoneyDisplay {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.symbol_position {
            SymbolPosition::Start => write!(
                f,
                "{}{}{}{}",
                self.symbol, self.integer, self.decimal_mark, self.fraction
            ),
            SymbolPosition::End => write!(
                f,
                "{}{}{} {}",
                self.integer, self.decimal_mark, self.fraction, self.symbol
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::listener::RecordingListener;

    fn input_with(
        default_integer: &str,
        default_float: &str,
    ) -> MoneyInput<RecordingListener> {
        MoneyInput::new(
            MoneyInputConfig {
                default_integer: default_integer.to_string(),
                default_float: default_float.to_string(),
                ..Default::default()
            },
            RecordingListener::default(),
        )
    }

    fn empty_input() -> MoneyInput<RecordingListener> {
        input_with("", "")
    }

    // =========================================================================
    // Seeding
    // =========================================================================

    #[test]
    fn seeded_value_is_formatted_and_emitted_once() {
        let input = input_with("1234567", "89");

        assert_eq!(input.display_integer(), "1,234,567");
        assert_eq!(input.display_fraction(), "89");
        assert_eq!(input.value(), "1234567.89");
        assert_eq!(input.listener().values(), ["1234567.89"]);
    }

    #[test]
    fn seeded_zero_fraction_is_empty() {
        let input = input_with("", "0");

        assert_eq!(input.raw_fraction(), "");
        assert_eq!(input.display_fraction(), "00");
    }

    #[test]
    fn seeded_single_digit_fraction_is_padded() {
        let input = input_with("3", "5");

        assert_eq!(input.raw_fraction(), "5");
        assert_eq!(input.display_fraction(), "05");
        assert!(input.value().ends_with(".05"));
    }

    #[test]
    fn seeded_double_zero_fraction_is_kept() {
        let input = input_with("7", "00");

        assert_eq!(input.raw_fraction(), "00");
        assert_eq!(input.value(), "7.00");
    }

    #[test]
    fn zero_integer_seed_starts_empty() {
        assert_eq!(input_with("0", "").raw_integer(), "");
        assert_eq!(input_with("000", "").raw_integer(), "");
    }

    #[test]
    fn non_numeric_seeds_do_not_fail() {
        let input = input_with("abc", "x9y");

        assert_eq!(input.raw_integer(), "");
        assert_eq!(input.raw_fraction(), "9");
        assert_eq!(input.display_integer(), "0");
    }

    #[test]
    fn empty_seed_emits_nothing() {
        let input = empty_input();

        assert!(input.listener().values().is_empty());
        assert_eq!(input.focus(), FocusTarget::Integer);
        assert_eq!(input.display_integer(), "0");
        assert_eq!(input.display_fraction(), "00");
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        let input = MoneyInput::new(
            MoneyInputConfig {
                locale: "zz-ZZ".to_string(),
                default_integer: "1000".to_string(),
                ..Default::default()
            },
            RecordingListener::default(),
        );

        assert_eq!(input.locale().tag, "en-US");
        assert_eq!(input.display_integer(), "1,000");
    }

    // =========================================================================
    // Integer field
    // =========================================================================

    #[test]
    fn integer_change_replaces_with_stripped_content() {
        let mut input = empty_input();

        let outcome = input.integer_changed("1a2 3");

        assert_eq!(input.raw_integer(), "123");
        assert_eq!(outcome.focus, None);
        assert_eq!(outcome.emitted.as_deref(), Some("123"));

        input.integer_changed("9");
        assert_eq!(input.raw_integer(), "9");
    }

    #[test]
    fn integer_change_keeps_leading_zeros() {
        let mut input = empty_input();

        input.integer_changed("0042");

        assert_eq!(input.raw_integer(), "0042");
        assert_eq!(input.display_integer(), "42");
        assert_eq!(input.value(), "0042");
    }

    #[test]
    fn separator_in_integer_moves_to_fraction() {
        let mut input = input_with("12", "34");

        let outcome = input.integer_changed("12.34");

        assert_eq!(input.raw_integer(), "12");
        assert_eq!(input.raw_fraction(), "");
        assert_eq!(input.focus(), FocusTarget::Fraction);
        assert_eq!(
            outcome.focus,
            Some(FocusRequest {
                target: FocusTarget::Fraction,
                caret: None
            })
        );
        assert_eq!(outcome.emitted.as_deref(), Some("12"));
    }

    #[test]
    fn comma_separator_also_moves_to_fraction() {
        let mut input = input_with("5", "");

        let outcome = input.integer_changed("5,");

        assert_eq!(input.raw_integer(), "5");
        assert_eq!(input.focus(), FocusTarget::Fraction);
        assert_eq!(outcome.emitted, None);
    }

    #[test]
    fn backspace_on_empty_integer_clears_fraction() {
        let mut input = input_with("", "45");
        input.integer_changed("");

        let outcome = input.integer_key(&Key::Backspace);

        assert_eq!(input.raw_fraction(), "");
        assert_eq!(outcome.focus, None);
        assert_eq!(input.focus(), FocusTarget::Integer);
    }

    #[test]
    fn backspace_on_non_empty_integer_does_nothing() {
        let mut input = input_with("12", "45");

        let outcome = input.integer_key(&Key::Backspace);

        assert_eq!(outcome, EditOutcome::default());
        assert_eq!(input.raw_fraction(), "45");
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut input = empty_input();

        assert_eq!(input.integer_key(&Key::from("a")), EditOutcome::default());
        assert_eq!(input.fraction_key(&Key::from("Enter")), EditOutcome::default());
        assert_eq!(input.focus(), FocusTarget::Integer);
    }

    // =========================================================================
    // Fraction field
    // =========================================================================

    #[test]
    fn fraction_change_is_capped_at_two_digits() {
        let mut input = input_with("1", "");

        input.fraction_changed("9x87");

        assert_eq!(input.raw_fraction(), "98");
        assert_eq!(input.value(), "1.98");
    }

    #[test]
    fn single_fraction_digit_is_zero_padded_in_value() {
        let mut input = input_with("1", "");

        let outcome = input.fraction_changed("3");

        assert_eq!(outcome.emitted.as_deref(), Some("1.03"));
        assert_eq!(input.snapshot().to_string(), "$1.03");
    }

    #[test]
    fn backspace_on_empty_fraction_pops_integer_and_refocuses() {
        let mut input = input_with("123", "");
        input.tap_fraction();

        let outcome = input.fraction_key(&Key::Backspace);

        assert_eq!(input.raw_integer(), "12");
        assert_eq!(input.focus(), FocusTarget::Integer);
        assert_eq!(
            outcome.focus,
            Some(FocusRequest::at_end(FocusTarget::Integer, 2))
        );
        assert_eq!(outcome.emitted.as_deref(), Some("12"));
    }

    #[test]
    fn backspace_on_empty_fraction_with_empty_integer() {
        let mut input = empty_input();
        input.tap_fraction();

        let outcome = input.fraction_key(&Key::Backspace);

        assert_eq!(input.raw_integer(), "");
        assert_eq!(input.raw_fraction(), "");
        assert_eq!(input.focus(), FocusTarget::Integer);
        assert_eq!(
            outcome.focus,
            Some(FocusRequest::at_end(FocusTarget::Integer, 0))
        );
        assert_eq!(outcome.emitted, None);
    }

    #[test]
    fn backspace_on_non_empty_fraction_does_nothing() {
        let mut input = input_with("123", "4");

        assert_eq!(input.fraction_key(&Key::Backspace), EditOutcome::default());
        assert_eq!(input.raw_integer(), "123");
    }

    // =========================================================================
    // Taps
    // =========================================================================

    #[test]
    fn tap_integer_puts_caret_at_end() {
        let mut input = input_with("4567", "");
        input.tap_fraction();

        let request = input.tap_integer();

        assert_eq!(request, FocusRequest::at_end(FocusTarget::Integer, 4));
        assert_eq!(input.focus(), FocusTarget::Integer);
    }

    #[test]
    fn tap_fraction_leaves_caret_alone() {
        let mut input = empty_input();

        assert_eq!(
            input.tap_fraction(),
            FocusRequest::anywhere(FocusTarget::Fraction)
        );
        assert_eq!(input.focus(), FocusTarget::Fraction);
    }

    // =========================================================================
    // Emission and derivation
    // =========================================================================

    #[test]
    fn refresh_never_emits_twice() {
        let mut input = input_with("10", "5");

        assert_eq!(input.refresh(), None);
        assert_eq!(input.refresh(), None);
        assert_eq!(input.listener().values(), ["10.05"]);
    }

    #[test]
    fn same_value_after_edit_is_not_reemitted() {
        let mut input = empty_input();

        input.integer_changed("12");
        input.integer_changed("1x2");
        input.fraction_changed("");
        input.integer_changed("12");

        assert_eq!(input.listener().values(), ["12"]);
    }

    #[test]
    fn full_typing_session() {
        let mut input = empty_input();

        input.integer_changed("1");
        input.integer_changed("12");
        input.integer_changed("125");
        input.integer_changed("125.");
        input.fraction_changed("5");
        input.fraction_changed("50");

        assert_eq!(
            input.listener().values(),
            ["1", "12", "125", "125.05", "125.50"]
        );
        assert_eq!(input.to_decimal().unwrap(), dec!(125.50));
    }

    #[test]
    fn set_locale_regroups_without_emitting() {
        let mut input = input_with("1234567", "");

        input.set_locale("de-DE");

        assert_eq!(input.display_integer(), "1.234.567");
        assert_eq!(input.snapshot().decimal_mark, ',');
        assert_eq!(input.listener().values(), ["1234567"]);
    }

    #[test]
    fn snapshot_renders_symbol_at_end() {
        let input = MoneyInput::new(
            MoneyInputConfig {
                symbol: "€".to_string(),
                symbol_position: SymbolPosition::End,
                locale: "de-DE".to_string(),
                default_integer: "1500".to_string(),
                default_float: "5".to_string(),
            },
            RecordingListener::default(),
        );

        assert_eq!(input.snapshot().to_string(), "1.500,05 €");
    }

    #[test]
    fn closure_listener_receives_values() {
        let mut seen = Vec::new();
        {
            let mut input = MoneyInput::new(MoneyInputConfig::default(), |v: &str| {
                seen.push(v.to_string())
            });
            input.integer_changed("8");
        }

        assert_eq!(seen, ["8"]);
    }

    #[test]
    fn into_listener_hands_back_recorded_values() {
        let mut input = empty_input();
        input.integer_changed("5");
        input.fraction_changed("25");

        let listener = input.into_listener();

        assert_eq!(listener.latest(), Some("5.25"));
        assert_eq!(listener.values().len(), 2);
    }

    // =========================================================================
    // to_decimal
    // =========================================================================

    #[test]
    fn to_decimal_empty_is_zero() {
        assert_eq!(empty_input().to_decimal().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn to_decimal_fraction_only() {
        let mut input = empty_input();
        input.fraction_changed("7");

        assert_eq!(input.value(), ".07");
        assert_eq!(input.to_decimal().unwrap(), dec!(0.07));
    }

    #[test]
    fn to_decimal_rejects_oversized_amounts() {
        let mut input = empty_input();
        input.integer_changed(&"9".repeat(40));

        assert!(input.to_decimal().is_err());
    }
}
