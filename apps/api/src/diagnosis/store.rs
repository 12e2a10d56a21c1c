//! Session storage for computed diagnosis vectors.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog::ProfileVector;

const KEY_PREFIX: &str = "compass:diagnosis";

/// Default lifetime of a stored diagnosis, in seconds.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),

    #[error("failed to encode diagnosis: {0}")]
    Encode(#[from] serde_json::Error),
}

pub fn session_key(session_id: Uuid) -> String {
    format!("{KEY_PREFIX}:{session_id}")
}

#[async_trait]
pub trait DiagnosisStore: Send + Sync {
    async fn save(&self, session_id: Uuid, scores: &ProfileVector) -> Result<(), StoreError>;

    /// `None` when the session is unknown, expired, or its payload is unreadable.
    async fn load(&self, session_id: Uuid) -> Result<Option<ProfileVector>, StoreError>;
}

/// Parses a stored payload. Anything unreadable or out of range counts as absent.
fn decode(session_id: Uuid, raw: &str) -> Option<ProfileVector> {
    match serde_json::from_str::<ProfileVector>(raw) {
        Ok(scores) if scores.out_of_range().is_none() => Some(scores),
        Ok(_) => {
            warn!("Diagnosis {session_id} holds out-of-range scores, ignoring");
            None
        }
        Err(e) => {
            warn!("Diagnosis {session_id} is not valid JSON, ignoring: {e}");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Redis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RedisDiagnosisStore {
    conn: MultiplexedConnection,
    ttl_secs: u64,
}

impl RedisDiagnosisStore {
    pub fn new(conn: MultiplexedConnection, ttl_secs: u64) -> Self {
        Self { conn, ttl_secs }
    }
}

#[async_trait]
impl DiagnosisStore for RedisDiagnosisStore {
    async fn save(&self, session_id: Uuid, scores: &ProfileVector) -> Result<(), StoreError> {
        let payload = serde_json::to_string(scores)?;
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(session_key(session_id), payload, self.ttl_secs)
            .await
            .map_err(|e: redis::RedisError| StoreError::Unavailable(e.to_string()))?;
        debug!("Stored diagnosis {session_id} (ttl {}s)", self.ttl_secs);
        Ok(())
    }

    async fn load(&self, session_id: Uuid) -> Result<Option<ProfileVector>, StoreError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn
            .get(session_key(session_id))
            .await
            .map_err(|e: redis::RedisError| StoreError::Unavailable(e.to_string()))?;
        Ok(raw.and_then(|r| decode(session_id, &r)))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Process-local store. Entries never expire.
#[derive(Default)]
pub struct InMemoryDiagnosisStore {
    entries: RwLock<HashMap<Uuid, String>>,
}

impl InMemoryDiagnosisStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn insert_raw(&self, session_id: Uuid, raw: &str) {
        self.entries.write().await.insert(session_id, raw.to_string());
    }
}

#[async_trait]
impl DiagnosisStore for InMemoryDiagnosisStore {
    async fn save(&self, session_id: Uuid, scores: &ProfileVector) -> Result<(), StoreError> {
        let payload = serde_json::to_string(scores)?;
        self.entries.write().await.insert(session_id, payload);
        Ok(())
    }

    async fn load(&self, session_id: Uuid) -> Result<Option<ProfileVector>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&session_id).and_then(|r| decode(session_id, r)))
    }
}
