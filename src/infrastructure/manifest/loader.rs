use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::domain::models::Manifest;
use crate::domain::ManifestError;

/// Reads `action.yml`-style manifests from disk
pub struct ManifestLoader;

impl ManifestLoader {
    /// Read and parse the manifest at `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest = Self::parse(&source, path)?;
        debug!(
            inputs = manifest.inputs.len(),
            outputs = manifest.outputs.len(),
            "Loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse manifest text; `path` is only used for error reporting.
    pub fn parse(source: &str, path: &Path) -> Result<Manifest, ManifestError> {
        // An empty document has no inputs or outputs.
        if is_blank_document(source) {
            return Ok(Manifest::default());
        }

        // `~` and `null` documents are empty too.
        serde_yaml::from_str::<Option<Manifest>>(source)
            .map(Option::unwrap_or_default)
            .map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

fn is_blank_document(source: &str) -> bool {
    source.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}
