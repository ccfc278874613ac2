use super::form::FormField;

// ============================================================================
// Order Form Validation Errors
// ============================================================================

/// A required field left empty, with the message shown under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

impl FieldError {
    pub fn missing(field: FormField) -> Self {
        Self {
            field,
            message: field.required_message(),
        }
    }
}

/// Every field that blocked a submission, in form order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", joined_messages(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.errors.iter().map(|e| e.field).collect()
    }

    /// Message for a single field, if that field failed
    pub fn message_for(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

fn joined_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ")
}
