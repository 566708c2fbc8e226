//! Per-lead enrichment pipeline.
//!
//! Sources are opaque producers of best-effort profile data. The pipeline runs them in order,
//! keeps going when one fails, and scores whatever bundle results.

mod snapshot;

pub use snapshot::SnapshotSource;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::leads::normalize_email;
use crate::profile::{HunterProfile, Lead, ProfileBundle};
use crate::scoring::{ScoreResult, ScoringEngine};

/// Adapter contributing profile data for a lead.
pub trait EnrichmentSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Sources that only run once a verified contact record is in the bundle.
    fn requires_verified_contact(&self) -> bool {
        false
    }

    fn enrich(&self, lead: &Lead, bundle: &mut ProfileBundle)
        -> Result<SourceOutcome, SourceError>;
}

/// What a successful source call cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceOutcome {
    pub cost: f64,
}

impl SourceOutcome {
    pub fn free() -> Self {
        Self::default()
    }

    pub fn costing(cost: f64) -> Self {
        Self { cost }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),
    #[error("malformed source data: {0}")]
    Malformed(String),
    #[error("source io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A lead with its gathered profiles and score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedLead {
    #[serde(flatten)]
    pub lead: Lead,
    pub profiles: ProfileBundle,
    pub score: ScoreResult,
}

/// Per-lead record handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationResult {
    pub success: bool,
    pub lead: Option<EnrichedLead>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub cost: f64,
}

impl QualificationResult {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            lead: None,
            error: Some(error.into()),
            cost: 0.0,
        }
    }
}

/// Runs enrichment sources and the scoring engine for each lead.
pub struct LeadQualifier {
    engine: Arc<ScoringEngine>,
    sources: Vec<Arc<dyn EnrichmentSource>>,
}

impl LeadQualifier {
    pub fn new(engine: Arc<ScoringEngine>) -> Self {
        Self {
            engine,
            sources: Vec::new(),
        }
    }

    pub fn with_source<S>(mut self, source: S) -> Self
    where
        S: EnrichmentSource + 'static,
    {
        self.sources.push(Arc::new(source));
        self
    }

    pub fn engine(&self) -> &Arc<ScoringEngine> {
        &self.engine
    }

    pub fn qualify(&self, lead: &Lead) -> QualificationResult {
        let Some(email) = normalize_email(&lead.email) else {
            warn!(email = %lead.email, "rejecting lead with unusable email");
            return QualificationResult::failed(format!("invalid email address '{}'", lead.email));
        };
        let mut lead = Lead {
            email,
            name: lead.name.clone(),
        };

        let mut bundle = ProfileBundle::default();
        let mut cost = 0.0;

        for source in &self.sources {
            if source.requires_verified_contact()
                && !bundle.hunter.as_ref().is_some_and(|hunter| hunter.verified)
            {
                debug!(source = source.name(), email = %lead.email, "skipping source without verified contact");
                continue;
            }

            match source.enrich(&lead, &mut bundle) {
                Ok(outcome) => cost += outcome.cost,
                Err(err) => {
                    warn!(source = source.name(), email = %lead.email, error = %err, "enrichment source failed");
                }
            }
        }

        if lead.name.is_none() {
            lead.name = bundle.hunter.as_ref().and_then(HunterProfile::full_name);
        }

        let score = self.engine.score(&bundle);
        info!(
            email = %lead.email,
            total = score.total,
            tier = score.tier.label(),
            cost,
            "qualified lead"
        );

        QualificationResult {
            success: true,
            lead: Some(EnrichedLead {
                lead,
                profiles: bundle,
                score,
            }),
            error: None,
            cost,
        }
    }

    /// Qualifies `leads` with at most `concurrency` pipelines in flight. Results keep input order.
    pub async fn qualify_all(
        self: Arc<Self>,
        leads: Vec<Lead>,
        concurrency: usize,
    ) -> Vec<QualificationResult> {
        let total = leads.len();
        let permits = Arc::new(Semaphore::new(concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for (index, lead) in leads.into_iter().enumerate() {
            let qualifier = Arc::clone(&self);
            let permits = Arc::clone(&permits);
            tasks.spawn(async move {
                let _permit = permits.acquire_owned().await;
                let outcome =
                    tokio::task::spawn_blocking(move || qualifier.qualify(&lead)).await;
                (index, outcome)
            });
        }

        let mut results: Vec<Option<QualificationResult>> = (0..total).map(|_| None).collect();
        let mut completed = 0usize;
        let mut spent = 0.0;

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(result))) => {
                    completed += 1;
                    spent += result.cost;
                    info!(completed, total, cost = spent, "lead qualification progress");
                    results[index] = Some(result);
                }
                Ok((index, Err(err))) => {
                    error!(index, error = %err, "qualification task failed");
                    results[index] = Some(QualificationResult::failed(format!(
                        "qualification task failed: {err}"
                    )));
                }
                Err(err) => error!(error = %err, "qualification task aborted"),
            }
        }

        results
            .into_iter()
            .map(|result| {
                result.unwrap_or_else(|| QualificationResult::failed("qualification task aborted"))
            })
            .collect()
    }
}
