use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use anyhow::{Context, Result};

use super::archive::Archive;
use super::error::FormatError;

/// Writes decoded archive members into an output directory.
pub struct MtkExtractor {
    output_dir: PathBuf,
}

impl MtkExtractor {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Resolve the on-disk path for an entry name.
    ///
    /// Names must be a single plain path component so every member lands
    /// directly inside the output directory. Embedded NULs are rejected
    /// here because no filesystem would accept them at write time.
    pub fn output_path(&self, name: &str) -> Result<PathBuf, FormatError> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !name.contains(['/', '\\', '\0']) => {
                Ok(self.output_dir.join(name))
            }
            _ => Err(FormatError::UnsafeName(name.to_string())),
        }
    }

    /// Check every name in the archive before anything is written.
    pub fn check_names(&self, archive: &Archive<'_>) -> Result<(), FormatError> {
        archive
            .files()
            .try_for_each(|(name, _)| self.output_path(name).map(drop))
    }

    /// Create the output directory and its parents.
    pub async fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| format!("cannot create {}", self.output_dir.display()))
    }

    /// Write one member, replacing any existing file of the same name.
    pub async fn extract_to_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let path = self.output_path(name)?;

        let mut file = fs::File::create(&path)
            .await
            .with_context(|| format!("cannot create {}", path.display()))?;
        file.write_all(data).await?;
        file.flush().await?;

        Ok(path)
    }

    /// Extract every member of `archive`.
    ///
    /// Names are validated up front; a write failure stops the run but
    /// leaves files already written in place. `on_file` is called with
    /// each name just before it is written.
    ///
    /// # Returns
    ///
    /// The number of files written.
    pub async fn extract_all<F>(&self, archive: &Archive<'_>, mut on_file: F) -> Result<usize>
    where
        F: FnMut(&str) -> Result<()>,
    {
        self.check_names(archive)?;
        self.prepare().await?;

        let mut written = 0;
        for (name, data) in archive.files() {
            on_file(name)?;
            self.extract_to_file(name, data).await?;
            written += 1;
        }

        Ok(written)
    }
}
