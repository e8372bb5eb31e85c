//! Managed directory holding copies of imported model files

use std::path::{Path, PathBuf};

use spoolwise_common::{Error, Result};

/// Model asset storage rooted at a single directory
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where `source` lands once imported: the root joined with its file name.
    ///
    /// Files sharing a name map to the same destination.
    pub fn destination_for(&self, source: &Path) -> Result<PathBuf> {
        let file_name = source.file_name().ok_or_else(|| {
            Error::Validation(format!("{} does not name a file", source.display()))
        })?;
        Ok(self.root.join(file_name))
    }

    /// Copy `source` into the store, creating the directory on demand.
    pub async fn import(&self, source: &Path) -> Result<PathBuf> {
        self.stage(source).await?.persist().await
    }

    /// Copy `source` into the store under a staging name.
    ///
    /// The destination is left alone until the returned asset is persisted.
    /// A source that already is the managed file is rejected.
    pub async fn stage(&self, source: &Path) -> Result<StagedAsset> {
        if !tokio::fs::try_exists(source).await? {
            return Err(Error::NotFound(format!(
                "Model file {}",
                source.display()
            )));
        }

        let destination = self.destination_for(source)?;
        if tokio::fs::try_exists(&destination).await? {
            let source_real = tokio::fs::canonicalize(source).await?;
            let destination_real = tokio::fs::canonicalize(&destination).await?;
            if source_real == destination_real {
                return Err(Error::Constraint(format!(
                    "{} is already in managed storage",
                    destination.display()
                )));
            }
        }

        tokio::fs::create_dir_all(&self.root).await?;
        let staging = staging_path(&destination);
        let bytes = tokio::fs::copy(source, &staging).await?;

        tracing::debug!(
            source = %source.display(),
            staging = %staging.display(),
            bytes,
            "Model file staged"
        );
        Ok(StagedAsset {
            staging,
            destination,
        })
    }

    /// Best-effort removal. Returns whether the file was removed.
    pub async fn remove(&self, path: &Path) -> bool {
        match tokio::fs::remove_file(path).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove model file");
                false
            }
        }
    }
}

/// A copied model file waiting to replace its destination
#[derive(Debug)]
pub struct StagedAsset {
    staging: PathBuf,
    destination: PathBuf,
}

impl StagedAsset {
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Move the staged copy over the destination.
    pub async fn persist(self) -> Result<PathBuf> {
        tokio::fs::rename(&self.staging, &self.destination).await?;
        tracing::debug!(destination = %self.destination.display(), "Model file imported");
        Ok(self.destination)
    }

    /// Drop the staged copy, leaving the destination as it was.
    pub async fn discard(self) {
        if let Err(e) = tokio::fs::remove_file(&self.staging).await {
            tracing::warn!(
                path = %self.staging.display(),
                error = %e,
                "Failed to discard staged model file"
            );
        }
    }
}

/// Hidden sibling of `destination` in the same directory, so the final
/// rename never crosses filesystems.
fn staging_path(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    destination.with_file_name(format!(".{}.partial", file_name))
}
