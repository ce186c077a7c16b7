//! Markup error types.

/// Error raised by the host rendering layer.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// No template registered under this name.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}
