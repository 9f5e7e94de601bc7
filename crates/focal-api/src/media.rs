use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};
use uuid::Uuid;

/// On-disk media storage.
///
/// Files land at `{root}/{kind}/{uuid}.jpg` and the database stores the
/// `{kind}/{uuid}.jpg` relative path, served back under `/media/`.
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub async fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root).await?;
        info!("Media storage directory: {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store compressed JPEG bytes, returning the relative path.
    pub async fn save(&self, kind: &str, bytes: &[u8]) -> Result<String> {
        let relative = format!("{}/{}.jpg", kind, Uuid::new_v4());
        let path = self.root.join(&relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, bytes).await?;
        Ok(relative)
    }

    /// Delete a stored file; a missing file is not an error.
    pub async fn delete(&self, relative: &str) -> Result<()> {
        if relative.contains("..") || relative.starts_with('/') {
            bail!("refusing to delete path outside media root: {}", relative);
        }
        let path = self.root.join(relative);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Media file {} already gone", relative);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
