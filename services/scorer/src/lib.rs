mod batch;

use lead_qualifier::config::AppConfig;
use lead_qualifier::error::AppError;
use lead_qualifier::scoring::ScoringEngine;
use lead_qualifier::telemetry;
use std::sync::Arc;
use tracing::info;

/// Scores the lead CSV on stdin and streams JSON results to stdout.
pub async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = Arc::new(ScoringEngine::from_path(&config.scoring.config_path)?);
    let active = engine.config();
    info!(
        ?config.environment,
        scoring_config = %config.scoring.config_path.display(),
        version = active.version.as_deref().unwrap_or("unversioned"),
        "lead scorer ready"
    );

    batch::run_batch(
        engine,
        &config.pipeline,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
    )
    .await?;
    Ok(())
}
