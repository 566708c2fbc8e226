use lead_qualifier::config::PipelineConfig;
use lead_qualifier::error::AppError;
use lead_qualifier::leads;
use lead_qualifier::pipeline::{LeadQualifier, QualificationResult, SnapshotSource};
use lead_qualifier::scoring::ScoringEngine;
use std::io::{Read, Write};
use std::sync::Arc;
use tracing::info;

/// Reads a lead CSV from `input`, qualifies every lead and writes one JSON result per line.
pub(crate) async fn run_batch<R, W>(
    engine: Arc<ScoringEngine>,
    pipeline: &PipelineConfig,
    input: R,
    mut output: W,
) -> Result<BatchSummary, AppError>
where
    R: Read,
    W: Write,
{
    let leads = leads::parse_leads(input)?;
    info!(leads = leads.len(), concurrency = pipeline.concurrency, "qualifying lead batch");

    let qualifier = Arc::new(
        LeadQualifier::new(engine).with_source(SnapshotSource::new(&pipeline.snapshot_dir)),
    );
    let results = qualifier.qualify_all(leads, pipeline.concurrency).await;

    let mut summary = BatchSummary::default();
    for result in &results {
        summary.record(result);
        serde_json::to_writer(&mut output, result)?;
        output.write_all(b"\n")?;
    }
    output.flush()?;

    info!(
        qualified = summary.qualified,
        failed = summary.failed,
        cost = summary.cost,
        "lead batch complete"
    );
    Ok(summary)
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct BatchSummary {
    pub(crate) qualified: usize,
    pub(crate) failed: usize,
    pub(crate) cost: f64,
}

impl BatchSummary {
    fn record(&mut self, result: &QualificationResult) {
        if result.success {
            self.qualified += 1;
        } else {
            self.failed += 1;
        }
        self.cost += result.cost;
    }
}
