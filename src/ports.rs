use async_trait::async_trait;

use crate::domain::order::{OrderDraft, OrderId};
use crate::domain::reference::ReferenceSets;
use crate::notifications::Notification;

// ============================================================================
// Ports - collaborators the composer is wired to
// ============================================================================
//
// The backend API, the toast surface and the router are owned by the host
// application. The composer only sees these traits.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Request task interrupted: {0}")]
    Interrupted(String),
}

/// Source of the customer and courier lists
#[async_trait]
pub trait ReferenceDirectory: Send + Sync {
    async fn fetch_reference_users(&self) -> Result<ReferenceSets, GatewayError>;
}

/// Backend endpoint that persists a new order
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create_order(&self, draft: &OrderDraft) -> Result<OrderId, GatewayError>;
}

/// User-visible toast sink
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Host router
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}
