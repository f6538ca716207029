//! The single output channel of a money input.

/// Receives the combined value whenever it changes.
pub trait ValueListener {
    fn value_changed(
        &mut self,
        value: &str,
    );
}

impl<F> ValueListener for F
where
    F: FnMut(&str),
{
    fn value_changed(
        &mut self,
        value: &str,
    ) {
        self(value)
    }
}

/// Listener that keeps every value it was given, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingListener {
    values: Vec<String>,
}

impl RecordingListener {
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Most recent value, if any was emitted.
    pub fn latest(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }
}

impl ValueListener for RecordingListener {
    fn value_changed(
        &mut self,
        value: &str,
    ) {
        self.values.push(value.to_string());
    }
}
