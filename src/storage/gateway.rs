//! Persistence gateway for finalized drafts
//!
//! The wizard controller commits a completed draft through this trait.
//! Commits must be all-or-nothing from the controller's perspective: either
//! the whole draft is persisted or nothing is.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use crate::wizard::draft::Draft;

use super::file_io::write_json_atomic;

/// Gateway commit failure
///
/// The only retryable error in the system: the controller preserves its
/// state and draft so the caller can try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct GatewayError(pub String);

/// Commits a finalized draft to durable storage
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Persist the whole draft atomically
    async fn commit(&self, draft: &Draft) -> Result<(), GatewayError>;
}

#[async_trait]
impl<T: PersistenceGateway + ?Sized> PersistenceGateway for Arc<T> {
    async fn commit(&self, draft: &Draft) -> Result<(), GatewayError> {
        (**self).commit(draft).await
    }
}

/// Gateway that writes the draft as pretty-printed JSON to a single file
///
/// Uses the atomic temp-file-and-rename write, so a crash mid-commit leaves
/// the previous file contents intact.
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    /// Create a gateway that commits to the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this gateway commits to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PersistenceGateway for JsonFileGateway {
    async fn commit(&self, draft: &Draft) -> Result<(), GatewayError> {
        write_json_atomic(&self.path, draft).map_err(|e| GatewayError(e.to_string()))
    }
}

/// In-memory gateway with programmable failures
///
/// Records every commit attempt and can be told to fail the next N commits,
/// which makes it useful for demos and for exercising the retry path.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    committed: Mutex<Option<Draft>>,
    fail_remaining: AtomicU32,
    attempts: AtomicU32,
}

impl MemoryGateway {
    /// Create a gateway that accepts every commit
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `n` commit attempts with a `GatewayError`
    pub fn fail_times(&self, n: u32) {
        self.fail_remaining.store(n, Ordering::SeqCst);
    }

    /// The last successfully committed draft, if any
    pub fn committed(&self) -> Option<Draft> {
        self.committed.lock().ok().and_then(|guard| guard.clone())
    }

    /// Total commit attempts, including failed ones
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn commit(&self, draft: &Draft) -> Result<(), GatewayError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail_remaining.load(Ordering::SeqCst) > 0 {
            self.fail_remaining.fetch_sub(1, Ordering::SeqCst);
            return Err(GatewayError("injected commit failure".into()));
        }

        let mut guard = self
            .committed
            .lock()
            .map_err(|_| GatewayError("gateway state poisoned".into()))?;
        *guard = Some(draft.clone());
        Ok(())
    }
}
