//! CSV event scripts replayed against a [`MoneyInput`](money_core::MoneyInput).
//!
//! ## CSV Format
//!
//! | Column  | Required | Notes                                              |
//! |---------|----------|----------------------------------------------------|
//! | `field` | yes      | `integer` or `fraction`                            |
//! | `event` | yes      | `change`, `key` or `tap`                           |
//! | `text`  | no       | Full field content for `change`, key name for `key` |
//!
//! Text containing a comma must be quoted.
//!
//! ```csv
//! field,event,text
//! integer,change,125
//! integer,change,125.
//! fraction,change,5
//! fraction,key,Backspace
//! integer,tap,
//! ```
use serde::Deserialize;

use money_core::{FocusTarget, Key};

#[derive(Debug, Deserialize)]
struct ScriptRow {
    field: String,
    event: String,
    #[serde(default)]
    text: Option<String>,
}

/// One input event aimed at one of the two fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    Change { field: FocusTarget, text: String },
    Key { field: FocusTarget, key: Key },
    Tap { field: FocusTarget },
}

impl ScriptEvent {
    pub fn field(&self) -> FocusTarget {
        match self {
            Self::Change { field, .. } | Self::Key { field, .. } | Self::Tap { field } => *field,
        }
    }
}

/// Errors that can occur while loading an event script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptLoadError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognised field '{field}' on row {row}")]
    UnknownField { field: String, row: usize },

    #[error("unrecognised event '{event}' on row {row}")]
    UnknownEvent { event: String, row: usize },

    #[error("key event on row {row} has no key name")]
    MissingKey { row: usize },
}

/// row_number is 1-based (for error messages).
fn convert_row(
    row: ScriptRow,
    row_number: usize,
) -> Result<ScriptEvent, ScriptLoadError> {
    let field =
        FocusTarget::parse(&row.field).ok_or_else(|| ScriptLoadError::UnknownField {
            field: row.field.clone(),
            row: row_number,
        })?;

    match row.event.as_str() {
        "change" => Ok(ScriptEvent::Change {
            field,
            text: row.text.unwrap_or_default(),
        }),
        "key" => {
            let name = row
                .text
                .filter(|name| !name.is_empty())
                .ok_or(ScriptLoadError::MissingKey { row: row_number })?;
            Ok(ScriptEvent::Key {
                field,
                key: Key::from_name(&name),
            })
        }
        "tap" => Ok(ScriptEvent::Tap { field }),
        _ => Err(ScriptLoadError::UnknownEvent {
            event: row.event,
            row: row_number,
        }),
    }
}

/// Parse a whole script and return its events in file order.
pub fn load_from_str(input: &str) -> Result<Vec<ScriptEvent>, ScriptLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true) // `tap` rows may omit the text column
        .from_reader(input.as_bytes());

    reader
        .deserialize::<ScriptRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

/// Read a script from disk and delegate to [load_from_str].
pub fn load_from_file(path: &std::path::Path) -> Result<Vec<ScriptEvent>, ScriptLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}
