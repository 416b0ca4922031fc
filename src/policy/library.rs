use super::*;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use tokio::sync::Mutex;

/// Process-wide policy slot shared by every session.
///
/// Loaded lazily on first [`Library::ensure`]. [`Library::reload`] builds a
/// whole new table before swapping the `Arc`, so readers holding a snapshot
/// keep a consistent table. A failed load is remembered until the next
/// explicit reload; lookups meanwhile see an empty table. Sessions never
/// wait on a fetch they did not start.
pub struct Library {
    store: Box<dyn Store>,
    bucket: String,
    key: String,
    credentials: Credentials,
    slot: RwLock<Arc<PolicyTable>>,
    tried: AtomicBool,
    reloading: Mutex<()>,
}

impl Library {
    pub fn new(
        store: Box<dyn Store>,
        bucket: impl Into<String>,
        key: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            key: key.into(),
            credentials,
            slot: RwLock::new(Arc::new(PolicyTable::default())),
            tried: AtomicBool::new(false),
            reloading: Mutex::new(()),
        }
    }

    /// Current snapshot. Never blocks on I/O.
    pub fn current(&self) -> Arc<PolicyTable> {
        match self.slot.read() {
            Ok(table) => table.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Decision engine over the current snapshot.
    pub fn engine(&self) -> Engine {
        Engine::from(self.current())
    }

    /// Loads the table once per process. Only the first caller fetches;
    /// everyone else returns at once and reads the current snapshot,
    /// including while that first load or a reload is in flight.
    pub async fn ensure(&self) {
        if !self.tried.swap(true, Ordering::AcqRel) {
            let _ = self.refresh().await;
        }
    }

    /// Fetches a fresh table and swaps it in. The previous table stays
    /// in place when the load fails. Concurrent reloads run one at a time.
    pub async fn reload(&self) -> Result<usize, StoreError> {
        self.tried.store(true, Ordering::Release);
        let _flight = self.reloading.lock().await;
        self.refresh().await
    }

    async fn refresh(&self) -> Result<usize, StoreError> {
        let table = load(self.store.as_ref(), &self.bucket, &self.key, &self.credentials)
            .await
            .inspect_err(|e| log::error!("[library] {}/{}: {}", self.bucket, self.key, e))?;
        let size = table.len();
        self.swap(table);
        log::info!("[library] loaded {} states from {}/{}", size, self.bucket, self.key);
        Ok(size)
    }

    fn swap(&self, table: PolicyTable) {
        let table = Arc::new(table);
        match self.slot.write() {
            Ok(mut slot) => *slot = table,
            Err(poisoned) => *poisoned.into_inner() = table,
        }
    }
}
