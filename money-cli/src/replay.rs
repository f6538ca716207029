//! Drives a [`MoneyInput`] from a list of script events.

use std::fmt;

use money_core::{EditOutcome, FocusTarget, MoneyInput, ValueListener};
use tracing::debug;

use crate::script::ScriptEvent;

/// The state of the input right after one event was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 1-based position of the event in the script.
    pub index: usize,
    pub event: ScriptEvent,
    pub outcome: EditOutcome,
    pub focus: FocusTarget,
    pub display: String,
}

impl fmt::Display for Step {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let event = match &self.event {
            ScriptEvent::Change { field, text } => format!("{} change {text:?}", field.as_str()),
            ScriptEvent::Key { field, key } => format!("{} key {key:?}", field.as_str()),
            ScriptEvent::Tap { field } => format!("{} tap", field.as_str()),
        };
        write!(
            f,
            "{:>3}  {:<28} focus={:<8} display={}",
            self.index,
            event,
            self.focus.as_str(),
            self.display
        )?;
        if let Some(caret) = self.outcome.focus.and_then(|request| request.caret) {
            write!(f, " caret={caret}")?;
        }
        if let Some(value) = &self.outcome.emitted {
            write!(f, " -> {value:?}")?;
        }
        Ok(())
    }
}

/// Applies a single event, routing it to the handler for its field.
pub fn apply<L: ValueListener>(
    input: &mut MoneyInput<L>,
    event: &ScriptEvent,
) -> EditOutcome {
    match event {
        ScriptEvent::Change {
            field: FocusTarget::Integer,
            text,
        } => input.integer_changed(text),
        ScriptEvent::Change {
            field: FocusTarget::Fraction,
            text,
        } => input.fraction_changed(text),
        ScriptEvent::Key {
            field: FocusTarget::Integer,
            key,
        } => input.integer_key(key),
        ScriptEvent::Key {
            field: FocusTarget::Fraction,
            key,
        } => input.fraction_key(key),
        ScriptEvent::Tap { field } => {
            let request = match field {
                FocusTarget::Integer => input.tap_integer(),
                FocusTarget::Fraction => input.tap_fraction(),
            };
            EditOutcome {
                focus: Some(request),
                emitted: None,
            }
        }
    }
}

/// Applies every event in order and records the state after each one.
pub fn replay<L: ValueListener>(
    input: &mut MoneyInput<L>,
    events: &[ScriptEvent],
) -> Vec<Step> {
    events
        .iter()
        .enumerate()
        .map(|(idx, event)| {
            let outcome = apply(input, event);
            debug!(index = idx + 1, ?event, ?outcome, "event applied");
            Step {
                index: idx + 1,
                event: event.clone(),
                outcome,
                focus: input.focus(),
                display: input.snapshot().to_string(),
            }
        })
        .collect()
}
