//! Session store: per-visitor key/value scratch space
//!
//! Values are opaque JSON. Sessions idle longer than the configured
//! lifetime read as empty and are dropped by [`start_session_sweeper`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::shared::shutdown::ShutdownSignal;

/// Key/value storage scoped to one visitor session
pub trait SessionStore: Send + Sync {
    fn get(&self, session_id: &str, key: &str) -> Option<Value>;
    fn put(&self, session_id: &str, key: &str, value: Value);
    fn remove(&self, session_id: &str, key: &str);
}

/// Shared, reference-counted session store
pub type SharedSessionStore = Arc<dyn SessionStore>;

struct SessionEntry {
    values: HashMap<String, Value>,
    touched: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            values: HashMap::new(),
            touched: Instant::now(),
        }
    }
}

/// Thread-safe in-process session store
pub struct InMemorySessionStore {
    sessions: DashMap<String, SessionEntry>,
    lifetime: Duration,
}

impl InMemorySessionStore {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            lifetime,
        }
    }

    pub fn shared(lifetime: Duration) -> Arc<Self> {
        Arc::new(Self::new(lifetime))
    }

    /// Number of live sessions, expired ones included until purged
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every session idle for longer than the lifetime
    pub fn purge_expired(&self) -> usize {
        let before = self.sessions.len();
        let lifetime = self.lifetime;
        self.sessions
            .retain(|_, entry| entry.touched.elapsed() <= lifetime);
        before.saturating_sub(self.sessions.len())
    }

    fn is_expired(&self, entry: &SessionEntry) -> bool {
        entry.touched.elapsed() > self.lifetime
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, session_id: &str, key: &str) -> Option<Value> {
        {
            let mut entry = self.sessions.get_mut(session_id)?;
            if !self.is_expired(&entry) {
                entry.touched = Instant::now();
                return entry.values.get(key).cloned();
            }
        }
        debug!(session_id, "Session expired");
        self.sessions.remove(session_id);
        None
    }

    fn put(&self, session_id: &str, key: &str, value: Value) {
        let mut entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(SessionEntry::new);
        if entry.touched.elapsed() > self.lifetime {
            entry.values.clear();
        }
        entry.touched = Instant::now();
        entry.values.insert(key.to_string(), value);
    }

    fn remove(&self, session_id: &str, key: &str) {
        if let Some(mut entry) = self.sessions.get_mut(session_id) {
            entry.values.remove(key);
            entry.touched = Instant::now();
        }
    }
}

/// Periodically purge idle sessions until shutdown
pub fn start_session_sweeper(
    store: Arc<InMemorySessionStore>,
    shutdown: ShutdownSignal,
    check_interval_secs: u64,
) {
    tokio::spawn(async move {
        info!(check_interval = check_interval_secs, "🧹 Session sweeper started");

        let mut interval = tokio::time::interval(Duration::from_secs(check_interval_secs));

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let purged = store.purge_expired();
                    if purged > 0 {
                        info!(purged, remaining = store.len(), "Purged idle sessions");
                    }
                }
                _ = shutdown.wait() => {
                    info!("🧹 Session sweeper shutting down");
                    break;
                }
            }
        }
    });
}
