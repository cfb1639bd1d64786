//! Invoice error types.

use thiserror::Error;

use crate::currency::CurrencyError;

/// Caller-side client info validation failure.
///
/// The renderer is never invoked until this passes; it is not a rendering
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid client info: {reason}")]
pub struct InvalidClientInfo {
    /// What was wrong, suitable for showing to the user.
    pub reason: String,
}

/// Errors from invoice rendering.
///
/// Rendering either fully succeeds or fails before producing any output;
/// a partial document is never returned.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The invoice currency is not in the static table. Raised before any
    /// layout work begins.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// The PDF backend failed.
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}
