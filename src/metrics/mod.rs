use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for the order composer
// ============================================================================
//
// - Order submissions (created, failed, blocked by validation)
// - Reference list loads by outcome
// - Notifications raised by level
//
// The host owns the registry and decides how to expose it.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub orders_submitted: IntCounter,
    pub orders_failed: IntCounter,
    pub validation_rejections: IntCounter,
    pub reference_loads: IntCounterVec,
    pub notifications: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_submitted = IntCounter::new(
            "orders_submitted_total",
            "Orders accepted by the gateway",
        )?;
        registry.register(Box::new(orders_submitted.clone()))?;

        let orders_failed = IntCounter::new(
            "orders_failed_total",
            "Order submissions the gateway failed",
        )?;
        registry.register(Box::new(orders_failed.clone()))?;

        let validation_rejections = IntCounter::new(
            "validation_rejections_total",
            "Submissions blocked by missing required fields",
        )?;
        registry.register(Box::new(validation_rejections.clone()))?;

        let reference_loads = IntCounterVec::new(
            Opts::new("reference_loads_total", "Reference list loads by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(reference_loads.clone()))?;

        let notifications = IntCounterVec::new(
            Opts::new("notifications_total", "Toasts raised by level"),
            &["level"],
        )?;
        registry.register(Box::new(notifications.clone()))?;

        Ok(Self {
            registry,
            orders_submitted,
            orders_failed,
            validation_rejections,
            reference_loads,
            notifications,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_reference_load(&self, ok: bool) {
        let outcome = if ok { "success" } else { "failure" };
        self.reference_loads.with_label_values(&[outcome]).inc();
    }

    pub fn record_notification(&self, level: &str) {
        self.notifications.with_label_values(&[level]).inc();
    }
}
