use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{EnrichmentSource, SourceError, SourceOutcome};
use crate::profile::{Lead, ProfileBundle};

/// Reads previously captured profile bundles from `<dir>/<email>.json`.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    dir: PathBuf,
}

impl SnapshotSource {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, email: &str) -> Result<PathBuf, SourceError> {
        if email.contains(['/', '\\']) || email.starts_with('.') {
            return Err(SourceError::Malformed(format!(
                "email '{email}' cannot name a snapshot file"
            )));
        }
        Ok(self.dir.join(format!("{email}.json")))
    }
}

impl EnrichmentSource for SnapshotSource {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn enrich(&self, lead: &Lead, bundle: &mut ProfileBundle) -> Result<SourceOutcome, SourceError> {
        let path = self.path_for(&lead.email)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no profile snapshot for lead");
                return Ok(SourceOutcome::free());
            }
            Err(err) => return Err(err.into()),
        };

        let snapshot: ProfileBundle = serde_json::from_str(&raw)
            .map_err(|err| SourceError::Malformed(format!("{}: {err}", path.display())))?;
        debug!(path = %path.display(), empty = snapshot.is_empty(), "loaded profile snapshot");
        bundle.absorb(snapshot);

        Ok(SourceOutcome::free())
    }
}
