mod founder;
mod github;
mod linkedin;

use std::collections::BTreeMap;

use super::config::{ScoringConfig, ScoringRules};
use super::signal::Signal;
use crate::profile::ProfileBundle;

pub(crate) use github::distinct_languages;
pub(crate) use linkedin::education_candidate;

/// Evaluates every signal the bundle supports. Signals that do not fire are left out of the
/// returned map rather than recorded as zero.
pub(crate) fn collect_signals(
    bundle: &ProfileBundle,
    config: &ScoringConfig,
) -> BTreeMap<Signal, f64> {
    let mut sheet = SignalSheet::new(config);

    if let Some(profile) = &bundle.github {
        github::score(profile, &mut sheet);
    }
    if let Some(profile) = &bundle.linkedin {
        linkedin::score(profile, &mut sheet);
    }
    if let Some(profile) = &bundle.founder {
        founder::score(profile, &mut sheet);
    }

    sheet.signals
}

/// Accumulates fired signals while exposing the document lookups rules need.
pub(crate) struct SignalSheet<'a> {
    config: &'a ScoringConfig,
    signals: BTreeMap<Signal, f64>,
}

impl<'a> SignalSheet<'a> {
    fn new(config: &'a ScoringConfig) -> Self {
        Self {
            config,
            signals: BTreeMap::new(),
        }
    }

    fn rules(&self) -> &ScoringRules {
        &self.config.scoring_rules
    }

    fn rule(&self, path: &str, default: f64) -> f64 {
        self.config.scoring_rules.number(path, default)
    }

    /// Category ceiling for `signal`, falling back to the signal's built-in default.
    fn max_points(&self, signal: Signal) -> f64 {
        let default = signal.default_max_points().unwrap_or(0.0);
        self.config.max_points(signal, default)
    }

    /// Records `points` for `signal` if it is a positive, finite contribution.
    fn record(&mut self, signal: Signal, points: f64) {
        if points.is_finite() && points > 0.0 {
            self.signals.insert(signal, points);
        }
    }
}

/// Linear ramp clamped at `cap`; `None` when `value` is below the qualifying `min`.
pub(crate) fn ramp(value: f64, min: f64, max: f64, cap: f64) -> Option<f64> {
    if value < min {
        return None;
    }
    let ratio = if max > 0.0 { (value / max).min(1.0) } else { 1.0 };
    Some(cap * ratio)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle))
}

fn mentions_advanced_degree(degree: Option<&str>) -> bool {
    degree
        .map(|degree| contains_any(degree, &["master", "phd", "doctorate"]))
        .unwrap_or(false)
}
