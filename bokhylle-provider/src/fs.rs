use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bokhylle_core::ShelfProvider;
use tracing::warn;

/// One file per key under the given root. Used on desktop, where the root
/// is typically somewhere under the user's data dir.
pub struct FsProvider {
    root: PathBuf,
}

impl FsProvider {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait(?Send)]
impl ShelfProvider for FsProvider {
    async fn load(&self, key: &str) -> Option<String> {
        let path = self.file_path(key);
        if !path.exists() {
            return None;
        }
        fs::read_to_string(&path).ok()
    }

    async fn save(&self, key: &str, content: &str) {
        if let Err(e) = fs::create_dir_all(&self.root) {
            warn!("failed to create {:?}: {e}", self.root);
            return;
        }
        if let Err(e) = fs::write(self.file_path(key), content) {
            warn!("failed to write {key}: {e}");
        }
    }

    async fn delete(&self, key: &str) {
        let path = self.file_path(key);
        if path.exists() {
            if let Err(e) = fs::remove_file(&path) {
                warn!("failed to delete {key}: {e}");
            }
        }
    }
}
