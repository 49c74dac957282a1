//! In-process session store, for embedding and tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use btpanel_core::{session_key, CookieJar, SessionStore};
use btpanel_domain::Result;
use dashmap::DashMap;

/// Keeps jars in memory keyed by the same SHA-1 host key as the file store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    jars: DashMap<String, CookieJar>,
    loads: AtomicUsize,
    saves: AtomicUsize,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the jar stored for `host`, if any.
    pub fn jar(&self, host: &str) -> Option<CookieJar> {
        self.jars.get(&session_key(host)).map(|entry| entry.value().clone())
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, host: &str) -> Result<CookieJar> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.jar(host).unwrap_or_default())
    }

    async fn save(&self, host: &str, jar: &CookieJar) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.jars.insert(session_key(host), jar.clone());
        Ok(())
    }
}
