use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::signal::{Category, Signal};
use super::Tier;

const DEFAULT_CATEGORY_WEIGHT: f64 = 25.0;
const DEFAULT_EXCEPTIONAL_CUTOFF: f64 = 80.0;
const DEFAULT_STRONG_CUTOFF: f64 = 60.0;
const DEFAULT_GOOD_CUTOFF: f64 = 40.0;
const DEFAULT_AVERAGE_CUTOFF: f64 = 20.0;

/// Hand-tuned scoring document: category weights, per-signal point ceilings, free-form rule
/// tunables and tier cutoffs.
///
/// Deserialization is lenient below the top level: a section with the wrong shape is treated
/// as missing so the engine falls back to its built-in defaults instead of failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", rename_all = "camelCase")]
pub struct ScoringConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub weights: CategoryWeights,
    pub ambition: BTreeMap<String, f64>,
    pub intelligence: BTreeMap<String, f64>,
    pub kindness: BTreeMap<String, f64>,
    pub track_record: BTreeMap<String, f64>,
    #[serde(rename = "scoring_rules")]
    pub scoring_rules: ScoringRules,
    pub tiers: TierThresholds,
}

impl ScoringConfig {
    /// Built-in document used when no file is configured.
    pub fn standard() -> Self {
        let mut config = Self {
            version: Some("standard".to_string()),
            weights: CategoryWeights::default(),
            ambition: BTreeMap::new(),
            intelligence: BTreeMap::new(),
            kindness: BTreeMap::new(),
            track_record: BTreeMap::new(),
            scoring_rules: ScoringRules::default(),
            tiers: TierThresholds::default(),
        };

        for signal in Signal::ALL {
            if let Some(points) = signal.default_max_points() {
                config
                    .points_mut(signal.category())
                    .insert(signal.key().to_string(), points);
            }
        }

        config
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScoringConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScoringConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), version = ?config.version, "loaded scoring config");
        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScoringConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.check_weights();
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self, ScoringConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.check_weights();
        Ok(config)
    }

    /// Point ceiling configured for `signal`, or `default` when the category map lacks it.
    pub fn max_points(&self, signal: Signal, default: f64) -> f64 {
        self.points(signal.category())
            .get(signal.key())
            .copied()
            .filter(|value| value.is_finite())
            .unwrap_or(default)
    }

    pub fn points(&self, category: Category) -> &BTreeMap<String, f64> {
        match category {
            Category::Ambition => &self.ambition,
            Category::Intelligence => &self.intelligence,
            Category::Kindness => &self.kindness,
            Category::TrackRecord => &self.track_record,
        }
    }

    fn points_mut(&mut self, category: Category) -> &mut BTreeMap<String, f64> {
        match category {
            Category::Ambition => &mut self.ambition,
            Category::Intelligence => &mut self.intelligence,
            Category::Kindness => &mut self.kindness,
            Category::TrackRecord => &mut self.track_record,
        }
    }

    fn check_weights(&self) {
        let total = self.weights.total();
        if (total - 100.0).abs() > 1e-6 {
            warn!(total, "scoring weights do not sum to 100");
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Relative importance of each category. Informational; signal ceilings drive the points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWeights {
    pub ambition: f64,
    pub intelligence: f64,
    pub kindness: f64,
    pub track_record: f64,
}

impl CategoryWeights {
    pub fn total(&self) -> f64 {
        self.ambition + self.intelligence + self.kindness + self.track_record
    }

    fn from_value(value: &Value) -> Self {
        Self {
            ambition: number_field(value, "ambition", DEFAULT_CATEGORY_WEIGHT),
            intelligence: number_field(value, "intelligence", DEFAULT_CATEGORY_WEIGHT),
            kindness: number_field(value, "kindness", DEFAULT_CATEGORY_WEIGHT),
            track_record: number_field(value, "trackRecord", DEFAULT_CATEGORY_WEIGHT),
        }
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::from_value(&Value::Null)
    }
}

/// Ascending cutoffs; a total below `average` is [`Tier::Weak`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub exceptional: f64,
    pub strong: f64,
    pub good: f64,
    pub average: f64,
}

impl TierThresholds {
    /// Lower bounds are inclusive; the highest tier reached wins.
    pub fn classify(&self, total: f64) -> Tier {
        if total >= self.exceptional {
            Tier::Exceptional
        } else if total >= self.strong {
            Tier::Strong
        } else if total >= self.good {
            Tier::Good
        } else if total >= self.average {
            Tier::Average
        } else {
            Tier::Weak
        }
    }

    fn from_value(value: &Value) -> Self {
        Self {
            exceptional: number_field(value, "exceptional", DEFAULT_EXCEPTIONAL_CUTOFF),
            strong: number_field(value, "strong", DEFAULT_STRONG_CUTOFF),
            good: number_field(value, "good", DEFAULT_GOOD_CUTOFF),
            average: number_field(value, "average", DEFAULT_AVERAGE_CUTOFF),
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::from_value(&Value::Null)
    }
}

/// Free-form nested tunables, resolved by dotted path with a caller-supplied default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringRules(Value);

impl ScoringRules {
    pub fn new(value: Value) -> Self {
        match value {
            Value::Object(_) => Self(value),
            _ => Self::default(),
        }
    }

    /// Numeric tunable at `path` (e.g. `github.min_repos`), or `default` when absent or not a
    /// finite number.
    pub fn number(&self, path: &str, default: f64) -> f64 {
        self.lookup(path)
            .and_then(Value::as_f64)
            .filter(|value| value.is_finite())
            .unwrap_or(default)
    }

    /// String list at `path`; non-string items are skipped. Missing or non-array values yield
    /// `default`.
    pub fn strings(&self, path: &str, default: &[&str]) -> Vec<String> {
        match self.lookup(path).and_then(Value::as_array) {
            Some(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            None => default.iter().map(|item| item.to_string()).collect(),
        }
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.0, |node, segment| node.get(segment))
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

/// Sections are pulled out as raw values so a mistyped one degrades to defaults on its own.
impl From<Map<String, Value>> for ScoringConfig {
    fn from(mut document: Map<String, Value>) -> Self {
        let mut section = |key: &str| document.remove(key).unwrap_or(Value::Null);

        let version = match section("version") {
            Value::String(version) => Some(version),
            Value::Number(version) => Some(version.to_string()),
            _ => None,
        };

        Self {
            version,
            weights: CategoryWeights::from_value(&section("weights")),
            ambition: point_map(&section("ambition"), "ambition"),
            intelligence: point_map(&section("intelligence"), "intelligence"),
            kindness: point_map(&section("kindness"), "kindness"),
            track_record: point_map(&section("trackRecord"), "trackRecord"),
            scoring_rules: ScoringRules::new(section("scoring_rules")),
            tiers: TierThresholds::from_value(&section("tiers")),
        }
    }
}

fn number_field(value: &Value, key: &str, default: f64) -> f64 {
    value
        .get(key)
        .and_then(Value::as_f64)
        .filter(|number| number.is_finite())
        .unwrap_or(default)
}

fn point_map(value: &Value, section: &str) -> BTreeMap<String, f64> {
    let Some(entries) = value.as_object() else {
        if !value.is_null() {
            warn!(section, "ignoring malformed scoring config section");
        }
        return BTreeMap::new();
    };

    entries
        .iter()
        .filter_map(|(signal, points)| match points.as_f64() {
            Some(points) if points.is_finite() => Some((signal.clone(), points)),
            _ => {
                debug!(section, signal = %signal, "skipping non-numeric signal ceiling");
                None
            }
        })
        .collect()
}

/// Failure to obtain a usable scoring document.
#[derive(Debug, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("failed to read scoring config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scoring config is not a valid document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scoring config was not loaded from a file and cannot be reloaded")]
    NoSource,
}

/// Holds the active scoring document. Readers take an `Arc` snapshot; reloads swap in a fully
/// parsed replacement so no reader ever sees a partially updated document.
#[derive(Debug)]
pub struct ConfigStore {
    source: Option<PathBuf>,
    current: RwLock<Arc<ScoringConfig>>,
}

impl ConfigStore {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            source: None,
            current: RwLock::new(Arc::new(config)),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScoringConfigError> {
        let path = path.as_ref().to_path_buf();
        let config = ScoringConfig::from_path(&path)?;
        Ok(Self {
            source: Some(path),
            current: RwLock::new(Arc::new(config)),
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn current(&self) -> Arc<ScoringConfig> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-reads the backing file. On failure the active document is left untouched.
    pub fn reload(&self) -> Result<Arc<ScoringConfig>, ScoringConfigError> {
        let path = self.source.as_ref().ok_or(ScoringConfigError::NoSource)?;
        let config = ScoringConfig::from_path(path)?;
        Ok(self.replace(config))
    }

    pub fn replace(&self, config: ScoringConfig) -> Arc<ScoringConfig> {
        let config = Arc::new(config);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn standard_document_carries_category_ceilings() {
        let config = ScoringConfig::standard();
        assert_eq!(config.ambition.get("github_projects"), Some(&10.0));
        assert_eq!(config.track_record.get("linkedin_promotions"), Some(&10.0));
        assert_eq!(config.weights.total(), 100.0);
        assert_eq!(config.tiers.exceptional, 80.0);
    }

    #[test]
    fn parse_tolerates_missing_and_malformed_sections() {
        let config = ScoringConfig::parse(
            r#"{"version":3,"ambition":"oops","kindness":{"github_open_source":12,"bad":"x"},"tiers":{"strong":55}}"#,
        )
        .expect("document parses");

        assert_eq!(config.version.as_deref(), Some("3"));
        assert!(config.ambition.is_empty());
        assert_eq!(config.kindness.len(), 1);
        assert_eq!(config.tiers.strong, 55.0);
        assert_eq!(config.tiers.good, DEFAULT_GOOD_CUTOFF);
        assert_eq!(config.weights, CategoryWeights::default());
    }

    #[test]
    fn parse_rejects_invalid_documents() {
        let error = ScoringConfig::parse("{ not json").expect_err("invalid document");
        assert!(matches!(error, ScoringConfigError::Parse(_)));

        let error = ScoringConfig::parse(r#""weights""#).expect_err("string is not a document");
        assert!(matches!(error, ScoringConfigError::Parse(_)));

        for raw in ["[]", "[{}]", "42"] {
            let error = ScoringConfig::parse(raw).expect_err("top level must be an object");
            assert!(matches!(error, ScoringConfigError::Parse(_)), "{raw}");
        }
    }

    #[test]
    fn from_reader_accepts_streamed_documents() {
        let raw = br#"{"version": "streamed", "tiers": {"good": 35}}"#;
        let config = ScoringConfig::from_reader(&raw[..]).expect("document parses");
        assert_eq!(config.version.as_deref(), Some("streamed"));
        assert_eq!(config.tiers.good, 35.0);
    }

    #[test]
    fn max_points_falls_back_to_default() {
        let config = ScoringConfig::parse(r#"{"intelligence":{"github_languages":4}}"#)
            .expect("document parses");
        assert_eq!(config.max_points(Signal::GithubLanguages, 8.0), 4.0);
        assert_eq!(config.max_points(Signal::GithubContributions, 7.0), 7.0);
    }

    #[test]
    fn rules_resolve_dotted_paths_with_defaults() {
        let rules = ScoringRules::new(json!({
            "github": { "min_repos": 5, "max_repos": "ten" },
            "linkedin": { "top_schools": ["MIT", 4, "Stanford"] }
        }));

        assert_eq!(rules.number("github.min_repos", 3.0), 5.0);
        assert_eq!(rules.number("github.max_repos", 10.0), 10.0);
        assert_eq!(rules.number("founder.points_per_company", 7.5), 7.5);
        assert_eq!(rules.number("github.min_repos.deeper", 1.0), 1.0);
        assert_eq!(
            rules.strings("linkedin.top_schools", &["Harvard"]),
            vec!["MIT".to_string(), "Stanford".to_string()]
        );
        assert_eq!(
            rules.strings("linkedin.leadership_titles", &["ceo"]),
            vec!["ceo".to_string()]
        );
    }

    #[test]
    fn non_object_rules_become_empty() {
        let rules = ScoringRules::new(json!([1, 2, 3]));
        assert_eq!(rules, ScoringRules::default());
    }

    #[test]
    fn tiers_classify_with_inclusive_lower_bounds() {
        let tiers = TierThresholds::default();
        assert_eq!(tiers.classify(80.0), Tier::Exceptional);
        assert_eq!(tiers.classify(79.9), Tier::Strong);
        assert_eq!(tiers.classify(60.0), Tier::Strong);
        assert_eq!(tiers.classify(40.0), Tier::Good);
        assert_eq!(tiers.classify(20.0), Tier::Average);
        assert_eq!(tiers.classify(19.9), Tier::Weak);
        assert_eq!(tiers.classify(0.0), Tier::Weak);
    }

    #[test]
    fn store_without_source_cannot_reload() {
        let store = ConfigStore::new(ScoringConfig::standard());
        assert!(store.source().is_none());
        assert!(matches!(
            store.reload().expect_err("no backing file"),
            ScoringConfigError::NoSource
        ));
    }

    #[test]
    fn replace_swaps_snapshot_without_touching_old_one() {
        let store = ConfigStore::new(ScoringConfig::standard());
        let before = store.current();

        let mut tuned = ScoringConfig::standard();
        tuned.tiers.exceptional = 50.0;
        store.replace(tuned);

        assert_eq!(before.tiers.exceptional, 80.0);
        assert_eq!(store.current().tiers.exceptional, 50.0);
    }

    #[test]
    fn serialized_config_parses_back() {
        let config = ScoringConfig::standard();
        let raw = serde_json::to_string(&config).expect("config serializes");
        let parsed = ScoringConfig::parse(&raw).expect("config parses");
        assert_eq!(parsed, config);
    }
}
