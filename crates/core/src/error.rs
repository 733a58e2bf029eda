/// Domain-level errors raised by form validation, wire-value parsing and
/// photo slot bookkeeping.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown {kind} value '{value}'")]
    UnknownValue { kind: &'static str, value: String },
}
