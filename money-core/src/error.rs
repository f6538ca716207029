use thiserror::Error;

/// Error returned when a combined value cannot be represented as a
/// [`rust_decimal::Decimal`].
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct AmountError {
    pub input: String,
    #[source]
    pub source: rust_decimal::Error,
}
