use super::*;
use bytes::Bytes;

/// Access key pair gating every artifact fetch.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access: String,
    pub secret: String,
    pub token: Option<String>,
}

impl Credentials {
    pub fn new(access: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            secret: secret.into(),
            token: None,
        }
    }
    pub fn from_env() -> Self {
        Self {
            access: std::env::var("AWS_ACCESS_KEY_ID").unwrap_or_default(),
            secret: std::env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_default(),
            token: std::env::var("AWS_SESSION_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
        }
    }
    /// Both halves of the pair must be present.
    pub fn complete(&self) -> bool {
        !self.access.trim().is_empty() && !self.secret.trim().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access", &self.access)
            .field("secret", &"<redacted>")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Errors that can occur while loading a policy artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    CredentialsMissing,
    Fetch(String),
    Deserialize(String),
    Encode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CredentialsMissing => write!(f, "policy store credentials not found"),
            Self::Fetch(s) => write!(f, "policy fetch failed: {}", s),
            Self::Deserialize(s) => write!(f, "malformed policy artifact: {}", s),
            Self::Encode(s) => write!(f, "policy artifact cannot hold table: {}", s),
        }
    }
}

impl std::error::Error for StoreError {}

/// Remote or local location of serialized policy artifacts.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn fetch(
        &self,
        bucket: &str,
        key: &str,
        credentials: &Credentials,
    ) -> Result<Bytes, StoreError>;
}

/// Fetches and decodes one artifact. Incomplete credentials fail before
/// the store is touched. Never serves cached data.
pub async fn load(
    store: &dyn Store,
    bucket: &str,
    key: &str,
    credentials: &Credentials,
) -> Result<PolicyTable, StoreError> {
    if !credentials.complete() {
        return Err(StoreError::CredentialsMissing);
    }
    let bytes = store.fetch(bucket, key, credentials).await?;
    log::debug!("[store] fetched {}/{} ({} bytes)", bucket, key, bytes.len());
    PolicyTable::from_bytes(&bytes)
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    /// In-memory store that counts fetches.
    #[derive(Default)]
    pub struct Memory {
        objects: HashMap<(String, String), Bytes>,
        fetches: AtomicUsize,
    }

    impl Memory {
        pub fn with(mut self, bucket: &str, key: &str, bytes: impl Into<Bytes>) -> Self {
            self.objects
                .insert((bucket.to_string(), key.to_string()), bytes.into());
            self
        }
        pub fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl Store for Memory {
        async fn fetch(&self, bucket: &str, key: &str, _: &Credentials) -> Result<Bytes, StoreError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.objects
                .get(&(bucket.to_string(), key.to_string()))
                .cloned()
                .ok_or_else(|| StoreError::Fetch(format!("no such key {}/{}", bucket, key)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::Memory;
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("AKIDEXAMPLE", "secret")
    }

    #[tokio::test]
    async fn missing_credentials_fail_before_fetch() {
        let store = Memory::default().with("b", "k", PolicyTable::default().to_bytes().unwrap());
        let half = Credentials::new("AKIDEXAMPLE", "");
        assert_eq!(
            load(&store, "b", "k", &half).await,
            Err(StoreError::CredentialsMissing)
        );
        assert_eq!(
            load(&store, "b", "k", &Credentials::default()).await,
            Err(StoreError::CredentialsMissing)
        );
        assert_eq!(store.fetches(), 0);
    }
    #[tokio::test]
    async fn missing_object_is_fetch_error() {
        let store = Memory::default();
        let err = load(&store, "b", "gone", &creds()).await.unwrap_err();
        assert!(matches!(err, StoreError::Fetch(_)));
        assert_eq!(store.fetches(), 1);
    }
    #[tokio::test]
    async fn garbage_is_deserialize_error() {
        let store = Memory::default().with("b", "k", &b"not a table"[..]);
        let err = load(&store, "b", "k", &creds()).await.unwrap_err();
        assert!(matches!(err, StoreError::Deserialize(_)));
    }
    #[tokio::test]
    async fn loads_table_every_call() {
        let table = PolicyTable::from_iter([(StateKey::new(12, 2, false), [0.0, 1.0, 0.0])]);
        let store = Memory::default().with("b", "k", table.to_bytes().unwrap());
        assert_eq!(load(&store, "b", "k", &creds()).await, Ok(table.clone()));
        assert_eq!(load(&store, "b", "k", &creds()).await, Ok(table));
        assert_eq!(store.fetches(), 2);
    }
    #[test]
    fn debug_redacts_secret() {
        let shown = format!("{:?}", creds());
        assert!(shown.contains("AKIDEXAMPLE"));
        assert!(!shown.contains("secret\""));
    }
}
