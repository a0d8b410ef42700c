// ABOUTME: Error taxonomy for column configuration misuse.
// ABOUTME: Raised during normalization, before any state mutation.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid column spec: {0}")]
    InvalidSpec(String),

    #[error("Expected {expected} labels, got {found}")]
    LabelCountMismatch { expected: usize, found: usize },

    #[error("Expected {expected} minimum widths, got {found}")]
    MinWidthCountMismatch { expected: usize, found: usize },
}
