// ============================================================================
// order_composer - headless delivery-order authoring
// ============================================================================
//
// Structure:
// - domain/        - draft, validation, line-item editor, reference lists
// - notifications/ - toasts and the backend error-code translator
// - ports          - collaborator traits (directory, gateway, toasts, router)
// - backend/       - in-memory collaborators
// - composer       - the OrderComposer orchestrating all of the above
//
// ============================================================================

pub mod backend;
pub mod composer;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod notifications;
pub mod ports;

pub use composer::{ComposerError, OrderComposer, SubmitControl, SubmitGauge};
pub use config::ComposerConfig;
