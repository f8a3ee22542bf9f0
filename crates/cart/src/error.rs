//! Widget-level error type.

use thiserror::Error;

use crate::actions::InputError;
use crate::storage::StorageError;

/// Anything a widget operation can fail with.
///
/// Absent anchors and clicks outside recognized controls are not errors;
/// those paths are silent no-ops. Errors mean the slot misbehaved, a control
/// carried unusable attributes, or a template failed to render.
#[derive(Debug, Error)]
pub enum CartError {
    /// Slot access or (de)serialization failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A control carried unusable attributes.
    #[error("invalid control input: {0}")]
    Input(#[from] InputError),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for [`CartError`].
pub type Result<T> = std::result::Result<T, CartError>;
