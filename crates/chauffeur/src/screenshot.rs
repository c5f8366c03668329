// Screenshot persistence
//
// Directory-ensure plus binary write for captured screenshots. Only the
// screenshot pass-through uses this.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::Result;

/// Writes captured screenshots under a fixed root directory.
#[derive(Debug, Clone)]
pub struct ScreenshotStore {
    root: PathBuf,
}

impl ScreenshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path a screenshot named `filename` in `subdir` will be written to.
    pub fn path_for(&self, subdir: &str, filename: &str) -> PathBuf {
        self.root.join(subdir).join(format!("{filename}.png"))
    }

    /// Ensures `<root>/<subdir>/` exists and writes `bytes` to
    /// `<filename>.png` inside it, returning the full path.
    pub async fn save(&self, subdir: &str, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let dir = self.root.join(subdir);
        fs::create_dir_all(&dir).await?;
        let path = dir.join(format!("{filename}.png"));
        fs::write(&path, bytes).await?;
        Ok(path)
    }
}
