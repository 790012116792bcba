//! Filesystem seed source for fixture directories.

use super::SeedSource;
use crate::error::{Error, Result};
use crate::key::SeedLocation;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Serves seed locations from files under a root directory.
///
/// `/data/users.json` resolves to `<root>/data/users.json`. Locations that
/// would leave the root (`..`) are refused.
#[derive(Clone, Debug)]
pub struct FileSeedSource {
    root: PathBuf,
}

impl FileSeedSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileSeedSource { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, location: &SeedLocation) -> Result<PathBuf> {
        let relative = Path::new(location.relative());
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(Error::SeedError(format!(
                "seed location {} escapes the fixture root",
                location
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl SeedSource for FileSeedSource {
    async fn fetch(&self, location: &SeedLocation) -> Result<Vec<u8>> {
        let path = self.resolve(location)?;
        debug!("File seed FETCH {} -> {}", location, path.display());

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::SeedStatus {
                status: 404,
                location: location.to_string(),
            }),
            Err(e) => Err(Error::SeedError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
