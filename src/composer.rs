use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::ComposerConfig;
use crate::domain::line_items::{EditorState, LineItemEditor, LineItemError};
use crate::domain::order::{
    ComposerCommand, FieldError, FormField, LineItem, OrderForm, OrderId, OrderStatus,
    ValidationErrors,
};
use crate::domain::reference::{
    PendingReferences, ReferenceKind, ReferenceSets, ReferenceState, SelectView,
};
use crate::metrics::Metrics;
use crate::notifications::{
    BackendError, ErrorObserver, Notification, ORDER_CREATED, ORDER_CREATE_FAILED,
};
use crate::ports::{GatewayError, Navigator, Notifier, OrderGateway, ReferenceDirectory};

// ============================================================================
// Order Composer
// ============================================================================
//
// Orchestrates: reference load → operator input → validation → create call
//               → toast + navigation
//
// The host must call `initialize` (or the start/finish pair) once before
// routing selections to the composer.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ComposerError {
    #[error("Composer is already initialized")]
    AlreadyInitialized,

    #[error("Reference lists are not available")]
    SelectionUnavailable,

    #[error("Unknown customer: {0}")]
    UnknownCustomer(String),

    #[error("Unknown courier: {0}")]
    UnknownCourier(String),

    #[error(transparent)]
    LineItem(#[from] LineItemError),

    #[error("Order form is incomplete: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Order submission failed: {0}")]
    Submission(#[from] GatewayError),
}

/// Shared view of the `submitting` flag, readable while a create call is in flight
#[derive(Debug, Clone, Default)]
pub struct SubmitGauge(Arc<AtomicBool>);

impl SubmitGauge {
    pub fn is_submitting(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn begin(&self) -> SubmitGuard {
        self.0.store(true, Ordering::SeqCst);
        SubmitGuard(self.0.clone())
    }
}

/// Clears the flag when the create call ends, including when it is dropped mid-flight
struct SubmitGuard(Arc<AtomicBool>);

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub loading: bool,
}

pub struct OrderComposer {
    config: ComposerConfig,
    directory: Arc<dyn ReferenceDirectory>,
    gateway: Arc<dyn OrderGateway>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    metrics: Option<Arc<Metrics>>,

    form: OrderForm,
    line_items: LineItemEditor,
    references: ReferenceState,
    field_errors: Vec<FieldError>,
    error_observer: ErrorObserver,
    submitting: SubmitGauge,
}

impl OrderComposer {
    pub fn new(
        config: ComposerConfig,
        directory: Arc<dyn ReferenceDirectory>,
        gateway: Arc<dyn OrderGateway>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            directory,
            gateway,
            notifier,
            navigator,
            metrics: None,
            form: OrderForm::default(),
            line_items: LineItemEditor::new(),
            references: ReferenceState::Idle,
            field_errors: Vec::new(),
            error_observer: ErrorObserver::new(),
            submitting: SubmitGauge::default(),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    // ------------------------------------------------------------------------
    // Reference data
    // ------------------------------------------------------------------------

    /// Kick off the one-shot reference fetch. The selects report loading until
    /// the returned handle is passed to `finish_initialization`.
    pub fn start_initialization(&mut self) -> Result<PendingReferences, ComposerError> {
        if self.references != ReferenceState::Idle {
            return Err(ComposerError::AlreadyInitialized);
        }

        tracing::debug!("Fetching customer and courier lists");
        self.references = ReferenceState::Loading;
        Ok(PendingReferences::spawn(self.directory.clone()))
    }

    pub fn finish_initialization(&mut self, result: Result<ReferenceSets, GatewayError>) {
        if self.references != ReferenceState::Loading {
            tracing::warn!("Ignoring reference result outside of initialization");
            return;
        }

        match result {
            Ok(sets) => {
                tracing::info!(
                    customers = sets.customers.len(),
                    couriers = sets.couriers.len(),
                    "Reference lists loaded"
                );
                self.record(|m| m.record_reference_load(true));
                self.references = ReferenceState::Ready(sets);
            }
            Err(error) => {
                tracing::error!(error = %error, "Error fetching customers and couriers");
                self.record(|m| m.record_reference_load(false));
                self.references = ReferenceState::Failed {
                    reason: error.to_string(),
                };
            }
        }
    }

    /// Fetch reference lists and apply the outcome. A failed fetch is not an
    /// error here: the composer stays usable with disabled selects.
    pub async fn initialize(&mut self) -> Result<(), ComposerError> {
        let pending = self.start_initialization()?;
        let result = pending.await;
        self.finish_initialization(result);
        Ok(())
    }

    pub fn reference_state(&self) -> &ReferenceState {
        &self.references
    }

    pub fn customer_select(&self) -> SelectView {
        SelectView::build(ReferenceKind::Customers, &self.references)
    }

    pub fn courier_select(&self) -> SelectView {
        SelectView::build(ReferenceKind::Couriers, &self.references)
    }

    pub fn status_options(&self) -> &'static [OrderStatus] {
        &OrderStatus::ALL
    }

    // ------------------------------------------------------------------------
    // Order fields
    // ------------------------------------------------------------------------

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
        self.clear_field_error(FormField::Title);
    }

    pub fn select_customer(&mut self, id: impl Into<String>) -> Result<(), ComposerError> {
        let id = id.into();
        let sets = self.references.sets().ok_or(ComposerError::SelectionUnavailable)?;
        if !sets.has_customer(&id) {
            return Err(ComposerError::UnknownCustomer(id));
        }
        self.form.customer_id = Some(id);
        self.clear_field_error(FormField::Customer);
        Ok(())
    }

    pub fn select_status(&mut self, status: OrderStatus) {
        self.form.status = Some(status);
        self.clear_field_error(FormField::Status);
    }

    pub fn set_origin_point(&mut self, origin: impl Into<String>) {
        self.form.origin_point = origin.into();
        self.clear_field_error(FormField::OriginPoint);
    }

    pub fn set_destination_point(&mut self, destination: impl Into<String>) {
        self.form.destination_point = destination.into();
        self.clear_field_error(FormField::DestinationPoint);
    }

    pub fn select_courier(&mut self, id: impl Into<String>) -> Result<(), ComposerError> {
        let id = id.into();
        let sets = self.references.sets().ok_or(ComposerError::SelectionUnavailable)?;
        if !sets.has_courier(&id) {
            return Err(ComposerError::UnknownCourier(id));
        }
        self.form.courier_id = Some(id);
        self.clear_field_error(FormField::Courier);
        Ok(())
    }

    /// Message currently shown under `field`, set by the last rejected submit
    pub fn field_error(&self, field: FormField) -> Option<&'static str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    fn clear_field_error(&mut self, field: FormField) {
        self.field_errors.retain(|e| e.field != field);
    }

    // ------------------------------------------------------------------------
    // Line items
    // ------------------------------------------------------------------------

    pub fn line_items(&self) -> &[LineItem] {
        self.line_items.items()
    }

    pub fn editor_state(&self) -> &EditorState {
        self.line_items.state()
    }

    pub fn add_product(&mut self) {
        self.line_items.open_create();
    }

    pub fn edit_product(&mut self, index: usize) -> Result<(), ComposerError> {
        Ok(self.line_items.open_edit(index)?)
    }

    pub fn delete_product(&mut self, index: usize) -> Result<LineItem, ComposerError> {
        Ok(self.line_items.delete(index)?)
    }

    pub fn set_product_label(&mut self, label: impl Into<String>) -> Result<(), ComposerError> {
        Ok(self.line_items.set_label(label)?)
    }

    pub fn set_product_units(&mut self, units: impl Into<String>) -> Result<(), ComposerError> {
        Ok(self.line_items.set_units(units)?)
    }

    pub fn confirm_product(&mut self) -> Result<usize, ComposerError> {
        Ok(self.line_items.confirm()?)
    }

    pub fn cancel_product(&mut self) {
        self.line_items.cancel();
    }

    /// Route a single operator action
    pub fn apply(&mut self, command: ComposerCommand) -> Result<(), ComposerError> {
        match command {
            ComposerCommand::SetTitle(title) => self.set_title(title),
            ComposerCommand::SelectCustomer(id) => self.select_customer(id)?,
            ComposerCommand::SelectStatus(status) => self.select_status(status),
            ComposerCommand::SetOriginPoint(origin) => self.set_origin_point(origin),
            ComposerCommand::SetDestinationPoint(dest) => self.set_destination_point(dest),
            ComposerCommand::SelectCourier(id) => self.select_courier(id)?,
            ComposerCommand::AddProduct => self.add_product(),
            ComposerCommand::EditProduct { index } => self.edit_product(index)?,
            ComposerCommand::DeleteProduct { index } => {
                self.delete_product(index)?;
            }
            ComposerCommand::SetProductLabel(label) => self.set_product_label(label)?,
            ComposerCommand::SetProductUnits(units) => self.set_product_units(units)?,
            ComposerCommand::ConfirmProduct => {
                self.confirm_product()?;
            }
            ComposerCommand::CancelProduct => self.cancel_product(),
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------------

    pub fn submit_gauge(&self) -> SubmitGauge {
        self.submitting.clone()
    }

    pub fn submit_control(&self) -> SubmitControl {
        let busy = self.submitting.is_submitting();
        SubmitControl {
            disabled: busy,
            loading: busy,
        }
    }

    /// Validate, send the draft and report the outcome to the operator.
    /// The draft is only cleared when the gateway accepts it.
    pub async fn submit(&mut self) -> Result<OrderId, ComposerError> {
        let draft = match self.form.to_draft(self.line_items.items()) {
            Ok(draft) => draft,
            Err(errors) => {
                tracing::warn!(missing = ?errors.fields(), "Order submission blocked by validation");
                self.record(|m| m.validation_rejections.inc());
                self.field_errors = errors.errors().to_vec();
                return Err(errors.into());
            }
        };
        self.field_errors.clear();

        tracing::info!(
            title = %draft.title,
            customer_id = %draft.customer_id,
            courier_id = %draft.courier_id,
            item_count = draft.line_items.len(),
            "Submitting order"
        );

        let result = {
            let _guard = self.submitting.begin();
            self.gateway.create_order(&draft).await
        };

        match result {
            Ok(order_id) => {
                tracing::info!(order_id = %order_id, "✅ Order created");
                self.record(|m| m.orders_submitted.inc());
                self.raise(Notification::success(ORDER_CREATED));
                self.navigator.navigate(&self.config.orders_route);
                self.reset_draft();
                Ok(order_id)
            }
            Err(error) => {
                tracing::error!(error = %error, "Order creation failed");
                self.record(|m| m.orders_failed.inc());
                self.raise(Notification::error(ORDER_CREATE_FAILED));
                Err(ComposerError::Submission(error))
            }
        }
    }

    fn reset_draft(&mut self) {
        self.form = OrderForm::default();
        self.line_items.reset();
        self.field_errors.clear();
    }

    // ------------------------------------------------------------------------
    // External errors
    // ------------------------------------------------------------------------

    /// Host hook for the externally owned error list. Returns how many toasts
    /// were raised.
    pub fn observe_errors(&mut self, errors: Arc<[BackendError]>) -> usize {
        let notifications = self.error_observer.observe(errors);
        let raised = notifications.len();
        for notification in notifications {
            self.raise(notification);
        }
        raised
    }

    fn raise(&self, notification: Notification) {
        self.record(|m| m.record_notification(notification.level.as_str()));
        self.notifier.notify(notification);
    }

    fn record(&self, f: impl FnOnce(&Metrics)) {
        if let Some(metrics) = &self.metrics {
            f(metrics);
        }
    }
}
