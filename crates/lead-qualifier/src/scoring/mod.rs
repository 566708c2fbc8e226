//! Lead fit scoring.
//!
//! [`score_bundle`] is a pure function of a [`ProfileBundle`] and a [`ScoringConfig`];
//! [`ScoringEngine`] pairs it with a [`ConfigStore`] so the document can be reloaded between
//! calls while each call works from one consistent snapshot.

pub mod config;
mod reasoning;
mod rules;
pub mod signal;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::ProfileBundle;

pub use config::{
    CategoryWeights, ConfigStore, ScoringConfig, ScoringConfigError, ScoringRules,
    TierThresholds,
};
pub use reasoning::{explain, FounderHighlights, ProfileHighlights, ReasoningStrategy};
pub use signal::{Category, Signal};

/// Scores bundles against the active scoring document.
#[derive(Debug)]
pub struct ScoringEngine {
    store: ConfigStore,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            store: ConfigStore::new(config),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScoringConfigError> {
        Ok(Self {
            store: ConfigStore::load(path)?,
        })
    }

    pub fn score(&self, bundle: &ProfileBundle) -> ScoreResult {
        let config = self.store.current();
        score_bundle(bundle, &config)
    }

    /// Snapshot of the active document. Later reloads do not affect it.
    pub fn config(&self) -> Arc<ScoringConfig> {
        self.store.current()
    }

    pub fn reload(&self) -> Result<Arc<ScoringConfig>, ScoringConfigError> {
        self.store.reload()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::standard())
    }
}

/// Scores `bundle` against `config`. Absent or empty sub-profiles only lower the score.
pub fn score_bundle(bundle: &ProfileBundle, config: &ScoringConfig) -> ScoreResult {
    let signals = rules::collect_signals(bundle, config);
    let breakdown = ScoreBreakdown::from_signals(&signals);
    let total = round_tenth(breakdown.sum());
    let tier = config.tiers.classify(total);
    let reasoning = explain(bundle, &signals, tier);

    debug!(
        total,
        tier = tier.label(),
        signals = signals.len(),
        "scored profile bundle"
    );

    ScoreResult {
        total,
        breakdown,
        signals,
        tier,
        reasoning,
    }
}

/// Discrete fit label derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Exceptional,
    Strong,
    Good,
    Average,
    Weak,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Exceptional => "exceptional",
            Tier::Strong => "strong",
            Tier::Good => "good",
            Tier::Average => "average",
            Tier::Weak => "weak",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tier::Exceptional => "Exceptional",
            Tier::Strong => "Strong",
            Tier::Good => "Good",
            Tier::Average => "Average",
            Tier::Weak => "Weak",
        }
    }
}

/// Points per category, each rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub ambition: f64,
    pub intelligence: f64,
    pub kindness: f64,
    pub track_record: f64,
}

impl ScoreBreakdown {
    fn from_signals(signals: &BTreeMap<Signal, f64>) -> Self {
        let mut breakdown = Self::default();
        for (signal, points) in signals {
            *breakdown.slot(signal.category()) += points;
        }
        for category in Category::ALL {
            let slot = breakdown.slot(category);
            *slot = round_tenth(*slot);
        }
        breakdown
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Ambition => self.ambition,
            Category::Intelligence => self.intelligence,
            Category::Kindness => self.kindness,
            Category::TrackRecord => self.track_record,
        }
    }

    pub fn sum(&self) -> f64 {
        self.ambition + self.intelligence + self.kindness + self.track_record
    }

    fn slot(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::Ambition => &mut self.ambition,
            Category::Intelligence => &mut self.intelligence,
            Category::Kindness => &mut self.kindness,
            Category::TrackRecord => &mut self.track_record,
        }
    }
}

/// Outcome of scoring one bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total: f64,
    pub breakdown: ScoreBreakdown,
    /// Only signals that fired.
    pub signals: BTreeMap<Signal, f64>,
    pub tier: Tier,
    pub reasoning: String,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
