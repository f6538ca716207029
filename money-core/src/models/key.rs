/// A key press reported by the text primitive.
///
/// Only backspace carries behaviour; everything else is kept by name so the
/// host can log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Other(String),
}

impl Key {
    /// Maps a platform key name (`"Backspace"`, `"a"`, `"Enter"`) to a [`Key`].
    /// The name must match exactly.
    pub fn from_name(name: &str) -> Self {
        if name == "Backspace" {
            Self::Backspace
        } else {
            Self::Other(name.to_string())
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
