mod translator;

use chrono::{DateTime, Utc};

pub use translator::{translate, BackendError, BackendErrorData, ErrorObserver};

/// Toast shown when an order is created
pub const ORDER_CREATED: &str = "Orden creada exitosamente";
/// Toast shown when the gateway refuses or fails the create call
pub const ORDER_CREATE_FAILED: &str = "Error creando la orden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        }
    }
}

/// A user-facing toast
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }
}
