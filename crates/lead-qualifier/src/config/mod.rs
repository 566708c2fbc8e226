use std::env;
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the scoring service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringSettings,
    pub pipeline: PipelineConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let config_path = env::var("SCORING_CONFIG_PATH")
            .unwrap_or_else(|_| "scoring-config.json".to_string());
        let snapshot_dir =
            env::var("PROFILE_SNAPSHOT_DIR").unwrap_or_else(|_| "profiles".to_string());

        let concurrency = parse_concurrency(
            &env::var("QUALIFY_CONCURRENCY").unwrap_or_else(|_| "4".to_string()),
        )?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringSettings {
                config_path: PathBuf::from(config_path),
            },
            pipeline: PipelineConfig {
                snapshot_dir: PathBuf::from(snapshot_dir),
                concurrency,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_concurrency(raw: &str) -> Result<usize, ConfigError> {
    let value = raw.trim();
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        Ok(_) => Err(ConfigError::InvalidConcurrency {
            value: value.to_string(),
            source: None,
        }),
        Err(source) => Err(ConfigError::InvalidConcurrency {
            value: value.to_string(),
            source: Some(source),
        }),
    }
}

/// Where the scoring document lives.
#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub config_path: PathBuf,
}

/// Batch qualification controls.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub snapshot_dir: PathBuf,
    pub concurrency: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidConcurrency {
        value: String,
        source: Option<ParseIntError>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidConcurrency { value, .. } => {
                write!(f, "QUALIFY_CONCURRENCY must be a positive integer, got '{value}'")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::InvalidConcurrency { source, .. } => {
                source.as_ref().map(|err| err as &(dyn Error + 'static))
            }
        }
    }
}
