// ============================================================================
// Error Types
// ============================================================================

/// Fatal conditions that abort a selection. No partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A required input field (`labels` or `PCAfeatures`) is absent.
    MissingField(String),
    /// Centers were provided but a label present in `labels` has no entry.
    MissingCenter(String),
    /// Structural mismatch between labels, feature rows and centers.
    ShapeMismatch(String),
    InvalidConfig(String),
    Serde(String),
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::MissingField(e) => write!(f, "Missing field: {}", e),
            SelectionError::MissingCenter(e) => write!(f, "Missing center: {}", e),
            SelectionError::ShapeMismatch(e) => write!(f, "Shape mismatch: {}", e),
            SelectionError::InvalidConfig(e) => write!(f, "Invalid config: {}", e),
            SelectionError::Serde(e) => write!(f, "Serde error: {}", e),
        }
    }
}

impl std::error::Error for SelectionError {}

impl From<serde_json::Error> for SelectionError {
    fn from(e: serde_json::Error) -> Self {
        SelectionError::Serde(e.to_string())
    }
}

pub type SelectResult<T> = Result<T, SelectionError>;
