use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Notification;

// ============================================================================
// Error-Code Translator
// ============================================================================
//
// Maps backend error codes to the text shown to the operator. Unknown codes
// fall back to the raw backend message, then to a generic string.
//
// ============================================================================

const USER_NOT_FOUND: &str = "El usuario no existe. Por favor, verifica tu correo.";
const INVALID_CREDENTIALS: &str = "La contraseña es incorrecta. Intenta nuevamente.";
const SERVER_ERROR: &str = "Ocurrió un error en el servidor. Intenta más tarde.";
const UNKNOWN_ERROR: &str = "Error desconocido";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendErrorData {
    #[serde(rename = "errorCode")]
    pub error_code: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Entry of the externally owned error list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendError {
    pub data: BackendErrorData,
}

impl BackendError {
    pub fn new(code: impl Into<String>, message: Option<&str>) -> Self {
        Self {
            data: BackendErrorData {
                error_code: code.into(),
                message: message.map(str::to_string),
            },
        }
    }
}

pub fn translate(code: &str, message: Option<&str>) -> String {
    match code {
        "USER_NOT_FOUND" => USER_NOT_FOUND.to_string(),
        "INVALID_CREDENTIALS" => INVALID_CREDENTIALS.to_string(),
        "SERVER_ERROR" => SERVER_ERROR.to_string(),
        _ => match message {
            Some(raw) if !raw.is_empty() => raw.to_string(),
            _ => UNKNOWN_ERROR.to_string(),
        },
    }
}

/// Tracks the last error list seen so the same list is only announced once.
/// The host passes the list in each time its copy changes.
#[derive(Debug, Default)]
pub struct ErrorObserver {
    last_seen: Option<Arc<[BackendError]>>,
}

impl ErrorObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications for `errors`, or nothing if this exact list was already
    /// observed or it is empty
    pub fn observe(&mut self, errors: Arc<[BackendError]>) -> Vec<Notification> {
        if let Some(previous) = &self.last_seen {
            if Arc::ptr_eq(previous, &errors) {
                return Vec::new();
            }
        }

        let notifications = errors
            .iter()
            .map(|e| {
                tracing::debug!(error_code = %e.data.error_code, "Translating backend error");
                Notification::error(translate(&e.data.error_code, e.data.message.as_deref()))
            })
            .collect();

        self.last_seen = Some(errors);
        notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationLevel;

    #[test]
    fn test_known_codes() {
        assert_eq!(
            translate("USER_NOT_FOUND", Some("ignored")),
            "El usuario no existe. Por favor, verifica tu correo."
        );
        assert_eq!(
            translate("INVALID_CREDENTIALS", None),
            "La contraseña es incorrecta. Intenta nuevamente."
        );
        assert_eq!(
            translate("SERVER_ERROR", None),
            "Ocurrió un error en el servidor. Intenta más tarde."
        );
    }

    #[test]
    fn test_unknown_code_uses_raw_message() {
        assert_eq!(translate("RATE_LIMITED", Some("Demasiadas solicitudes")), "Demasiadas solicitudes");
    }

    #[test]
    fn test_unknown_code_without_message_falls_back() {
        assert_eq!(translate("RATE_LIMITED", None), "Error desconocido");
        assert_eq!(translate("RATE_LIMITED", Some("")), "Error desconocido");
    }

    #[test]
    fn test_backend_error_payload() {
        let raw = r#"[{"data": {"errorCode": "USER_NOT_FOUND", "message": "no user"}},
                      {"data": {"errorCode": "OTHER"}}]"#;
        let errors: Vec<BackendError> = serde_json::from_str(raw).unwrap();

        assert_eq!(errors[0], BackendError::new("USER_NOT_FOUND", Some("no user")));
        assert_eq!(errors[1].data.message, None);
    }

    #[test]
    fn test_observer_emits_one_toast_per_error_in_order() {
        let mut observer = ErrorObserver::new();
        let errors: Arc<[BackendError]> = Arc::from(vec![
            BackendError::new("SERVER_ERROR", None),
            BackendError::new("CUSTOM", Some("Algo paso")),
        ]);

        let toasts = observer.observe(errors);

        assert_eq!(toasts.len(), 2);
        assert!(toasts.iter().all(|t| t.level == NotificationLevel::Error));
        assert_eq!(toasts[0].message, "Ocurrió un error en el servidor. Intenta más tarde.");
        assert_eq!(toasts[1].message, "Algo paso");
    }

    #[test]
    fn test_observer_ignores_same_list_and_empty_lists() {
        let mut observer = ErrorObserver::new();
        let errors: Arc<[BackendError]> = Arc::from(vec![BackendError::new("SERVER_ERROR", None)]);

        assert_eq!(observer.observe(errors.clone()).len(), 1);
        assert!(observer.observe(errors.clone()).is_empty());
        assert!(observer.observe(Arc::from(Vec::<BackendError>::new())).is_empty());

        // an equal but newly allocated list is a change
        let again: Arc<[BackendError]> = Arc::from(vec![BackendError::new("SERVER_ERROR", None)]);
        assert_eq!(observer.observe(again).len(), 1);
    }
}
