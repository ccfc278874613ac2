use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_composer::backend::{InMemoryBackend, RecordingShell};
use order_composer::domain::order::{ComposerCommand, OrderStatus};
use order_composer::domain::reference::{ReferenceSets, ReferenceUser};
use order_composer::metrics::Metrics;
use order_composer::notifications::BackendError;
use order_composer::{ComposerConfig, ComposerError, OrderComposer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_composer=debug")),
        )
        .init();

    tracing::info!("🚀 Starting order composer demo");

    let metrics = Arc::new(Metrics::new()?);
    let backend = Arc::new(InMemoryBackend::new(ReferenceSets {
        customers: vec![
            ReferenceUser::new("u1", "ana"),
            ReferenceUser::new("u2", "marta"),
        ],
        couriers: vec![ReferenceUser::new("r1", "luis")],
    }));
    let shell = Arc::new(RecordingShell::new());

    let mut composer = OrderComposer::new(
        ComposerConfig::default(),
        backend.clone(),
        backend.clone(),
        shell.clone(),
        shell.clone(),
    )
    .with_metrics(metrics.clone());

    // === 1. Load reference lists ===
    composer.initialize().await?;
    tracing::info!(
        customers = composer.customer_select().options.len(),
        couriers = composer.courier_select().options.len(),
        "Selects ready"
    );

    // === 2. Submitting an empty form is blocked locally ===
    if let Err(ComposerError::Validation(errors)) = composer.submit().await {
        for error in errors.errors() {
            tracing::info!(field = error.field.label(), hint = error.message, "Missing field");
        }
    }

    // === 3. Fill the form and add products ===
    let commands = vec![
        ComposerCommand::SetTitle("Reparto centro".to_string()),
        ComposerCommand::SelectCustomer("u1".to_string()),
        ComposerCommand::SelectStatus(OrderStatus::Pending),
        ComposerCommand::SetOriginPoint("Bodega norte".to_string()),
        ComposerCommand::SetDestinationPoint("Calle 8 #12".to_string()),
        ComposerCommand::SelectCourier("r1".to_string()),
        ComposerCommand::AddProduct,
        ComposerCommand::SetProductLabel("Caja".to_string()),
        ComposerCommand::SetProductUnits("3".to_string()),
        ComposerCommand::ConfirmProduct,
        ComposerCommand::AddProduct,
        ComposerCommand::SetProductLabel("Sobre".to_string()),
        ComposerCommand::ConfirmProduct,
    ];
    for command in commands {
        composer.apply(command)?;
    }
    for item in composer.line_items() {
        tracing::info!("📦 {}", item);
    }

    // === 4. First attempt fails, the draft survives for a retry ===
    backend.fail_next_creates(1);
    if let Err(error) = composer.submit().await {
        tracing::warn!(error = %error, "Submission failed, retrying");
    }
    let order_id = composer.submit().await?;
    tracing::info!(order_id = %order_id, routes = ?shell.routes(), "✅ Order submitted");

    // === 5. Host forwards backend errors ===
    let errors: Arc<[BackendError]> = Arc::from(vec![
        BackendError::new("SERVER_ERROR", None),
        BackendError::new("QUOTA_EXCEEDED", Some("Límite diario alcanzado")),
    ]);
    composer.observe_errors(errors);

    tracing::info!(
        toasts = shell.notifications().len(),
        metric_families = metrics.registry().gather().len(),
        "🎉 Demo complete!"
    );

    Ok(())
}
