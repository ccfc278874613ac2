use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use crate::domain::order::FormField;
use crate::ports::{GatewayError, ReferenceDirectory};

use super::value_objects::{ReferenceSets, ReferenceUser};

// ============================================================================
// Reference-Data Loader
// ============================================================================
//
// One-shot fetch of the customer and courier lists. Failure is degraded
// mode: the selects stay disabled and nothing is retried.
//
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReferenceState {
    /// Initialization not started yet
    #[default]
    Idle,
    Loading,
    Ready(ReferenceSets),
    Failed { reason: String },
}

impl ReferenceState {
    pub fn sets(&self) -> Option<&ReferenceSets> {
        match self {
            ReferenceState::Ready(sets) => Some(sets),
            _ => None,
        }
    }
}

/// Which select a view is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Customers,
    Couriers,
}

impl ReferenceKind {
    fn loading_placeholder(&self) -> &'static str {
        match self {
            ReferenceKind::Customers => "Cargando usuarios...",
            ReferenceKind::Couriers => "Cargando repartidores...",
        }
    }

    fn ready_placeholder(&self) -> &'static str {
        match self {
            ReferenceKind::Customers => FormField::Customer.placeholder(),
            ReferenceKind::Couriers => FormField::Courier.placeholder(),
        }
    }

    fn pick<'a>(&self, sets: &'a ReferenceSets) -> &'a [ReferenceUser] {
        match self {
            ReferenceKind::Customers => &sets.customers,
            ReferenceKind::Couriers => &sets.couriers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// What a customer/courier select should render right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub placeholder: &'static str,
    pub disabled: bool,
    pub loading: bool,
    pub options: Vec<SelectOption>,
}

impl SelectView {
    pub fn build(kind: ReferenceKind, state: &ReferenceState) -> Self {
        match state {
            ReferenceState::Idle | ReferenceState::Loading => Self {
                placeholder: kind.loading_placeholder(),
                disabled: true,
                loading: true,
                options: Vec::new(),
            },
            ReferenceState::Ready(sets) => Self {
                placeholder: kind.ready_placeholder(),
                disabled: false,
                loading: false,
                options: kind
                    .pick(sets)
                    .iter()
                    .map(|user| SelectOption {
                        value: user.id.clone(),
                        label: user.display_name.clone(),
                    })
                    .collect(),
            },
            ReferenceState::Failed { .. } => Self {
                placeholder: kind.ready_placeholder(),
                disabled: true,
                loading: false,
                options: Vec::new(),
            },
        }
    }
}

/// Handle to an in-flight reference fetch. Resolves to the directory result.
pub struct PendingReferences {
    handle: JoinHandle<Result<ReferenceSets, GatewayError>>,
}

impl PendingReferences {
    /// Spawn the fetch on the current tokio runtime
    pub fn spawn(directory: Arc<dyn ReferenceDirectory>) -> Self {
        let handle = tokio::spawn(async move { directory.fetch_reference_users().await });
        Self { handle }
    }
}

impl Future for PendingReferences {
    type Output = Result<ReferenceSets, GatewayError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(join_error)) => {
                Poll::Ready(Err(GatewayError::Interrupted(join_error.to_string())))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
