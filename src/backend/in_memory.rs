use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Notify;

use crate::domain::order::{OrderDraft, OrderId};
use crate::domain::reference::ReferenceSets;
use crate::notifications::Notification;
use crate::ports::{GatewayError, Navigator, Notifier, OrderGateway, ReferenceDirectory};

// ============================================================================
// In-Memory Backend
// ============================================================================
//
// Stand-in for the remote API. Failures can be injected and either call can
// be held pending behind a gate until the caller releases it.
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct StoredOrder {
    pub id: OrderId,
    pub draft: OrderDraft,
    pub created_at: DateTime<Utc>,
}

pub struct InMemoryBackend {
    reference_sets: ReferenceSets,
    reference_failure: Option<GatewayError>,
    reference_gate: Option<Arc<Notify>>,
    create_gate: Option<Arc<Notify>>,
    pending_create_failures: AtomicU32,
    fetch_calls: AtomicUsize,
    create_calls: AtomicUsize,
    orders: tokio::sync::Mutex<Vec<StoredOrder>>,
}

impl InMemoryBackend {
    pub fn new(reference_sets: ReferenceSets) -> Self {
        Self {
            reference_sets,
            reference_failure: None,
            reference_gate: None,
            create_gate: None,
            pending_create_failures: AtomicU32::new(0),
            fetch_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            orders: tokio::sync::Mutex::new(Vec::new()),
        }
    }

    /// Every reference fetch fails with `error`
    pub fn with_reference_failure(mut self, error: GatewayError) -> Self {
        self.reference_failure = Some(error);
        self
    }

    /// Reference fetches wait until `gate` is notified
    pub fn with_reference_gate(mut self, gate: Arc<Notify>) -> Self {
        self.reference_gate = Some(gate);
        self
    }

    /// Create calls wait until `gate` is notified
    pub fn with_create_gate(mut self, gate: Arc<Notify>) -> Self {
        self.create_gate = Some(gate);
        self
    }

    /// The next `count` create calls fail
    pub fn fail_next_creates(&self, count: u32) {
        self.pending_create_failures.store(count, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub async fn orders(&self) -> Vec<StoredOrder> {
        self.orders.lock().await.clone()
    }
}

#[async_trait]
impl ReferenceDirectory for InMemoryBackend {
    async fn fetch_reference_users(&self) -> Result<ReferenceSets, GatewayError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.reference_gate {
            gate.notified().await;
        }

        match &self.reference_failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.reference_sets.clone()),
        }
    }
}

#[async_trait]
impl OrderGateway for InMemoryBackend {
    async fn create_order(&self, draft: &OrderDraft) -> Result<OrderId, GatewayError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.create_gate {
            gate.notified().await;
        }

        let should_fail = self
            .pending_create_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(GatewayError::Unavailable("injected failure".to_string()));
        }

        let id = OrderId::new();
        self.orders.lock().await.push(StoredOrder {
            id,
            draft: draft.clone(),
            created_at: Utc::now(),
        });

        tracing::debug!(order_id = %id, "Stored order in memory");
        Ok(id)
    }
}

/// Host surface that records toasts and navigations
#[derive(Debug, Default)]
pub struct RecordingShell {
    notifications: Mutex<Vec<Notification>>,
    routes: Mutex<Vec<String>>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Notifier for RecordingShell {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            toast_level = notification.level.as_str(),
            text = %notification.message,
            "Toast"
        );
        self.notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notification);
    }
}

impl Navigator for RecordingShell {
    fn navigate(&self, route: &str) {
        tracing::info!(route, "Navigating");
        self.routes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(route.to_string());
    }
}
