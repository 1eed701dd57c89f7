// Error types for the layout engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Drop target missing, unparseable, or naming an unknown event.
    #[error("Invalid drop target: {0}")]
    InvalidDropTarget(String),

    /// Timed event whose end does not come after its start.
    #[error("Malformed event '{id}': {reason}")]
    MalformedEvent { id: String, reason: String },

    /// Resize that would leave the event shorter than allowed.
    #[error("Invalid resize: {0}")]
    InvalidResize(String),
}
