use super::*;
use bytes::Bytes;
use std::path::PathBuf;

/// Artifacts laid out as `<root>/<bucket>/<key>` on the local filesystem.
/// Used for offline runs against a copy of the bucket.
#[derive(Debug, Clone)]
pub struct Disk {
    root: PathBuf,
}

impl Disk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
    pub fn path(&self, bucket: &str, key: &str) -> PathBuf {
        self.root.join(bucket).join(key)
    }
}

#[async_trait::async_trait]
impl Store for Disk {
    async fn fetch(&self, bucket: &str, key: &str, _: &Credentials) -> Result<Bytes, StoreError> {
        let ref path = self.path(bucket, key);
        log::info!("{:<32}{:<32}", "loading     policy", path.display());
        tokio::fs::read(path)
            .await
            .map(Bytes::from)
            .map_err(|e| StoreError::Fetch(format!("{}: {}", path.display(), e)))
    }
}
