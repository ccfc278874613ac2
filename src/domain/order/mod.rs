// ============================================================================
// Order Domain - the draft being authored
// ============================================================================
//
// - Value objects (OrderDraft, LineItem, OrderStatus, OrderId)
// - Form input and per-field validation (OrderForm, FormField)
// - Commands (ComposerCommand)
// - Errors (ValidationErrors)
//
// ============================================================================

pub mod value_objects;
pub mod form;
pub mod commands;
pub mod errors;

pub use value_objects::*;
pub use form::*;
pub use commands::*;
pub use errors::*;
