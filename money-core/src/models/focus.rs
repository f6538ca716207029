/// The editable region that receives keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    #[default]
    Integer,
    Fraction,
}

impl FocusTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Fraction => "fraction",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "integer" | "int" => Some(Self::Integer),
            "fraction" | "float" | "frac" => Some(Self::Fraction),
            _ => None,
        }
    }
}

/// A request for the host's text primitive to move focus.
///
/// `caret` is a character offset into the target field's raw text; `None`
/// leaves caret placement to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    pub target: FocusTarget,
    pub caret: Option<usize>,
}

impl FocusRequest {
    pub fn at_end(
        target: FocusTarget,
        text_len: usize,
    ) -> Self {
        Self {
            target,
            caret: Some(text_len),
        }
    }

    pub fn anywhere(target: FocusTarget) -> Self {
        Self {
            target,
            caret: None,
        }
    }
}

/// What an input event did besides mutating raw state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOutcome {
    /// Focus change the host should apply, if any.
    pub focus: Option<FocusRequest>,
    /// Combined value passed to the listener during this event, if any.
    pub emitted: Option<String>,
}
