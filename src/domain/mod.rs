// ============================================================================
// Domain Layer - Order Authoring
// ============================================================================
//
// - order/       - the draft, its form inputs and validation
// - line_items/  - product list and its modal editor
// - reference/   - customer and courier lists used by the selects
//
// Nothing here talks to a backend directly; collaborators live in `ports`.
//
// ============================================================================

pub mod order;
pub mod line_items;
pub mod reference;
