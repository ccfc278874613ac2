// ============================================================================
// Line Item Editor Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineItemError {
    #[error("No line item at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Product editor is not open")]
    EditorClosed,

    #[error("Units must be a whole number of at least 1, got {0:?}")]
    InvalidUnits(String),
}
