//! Cookie jars persisted as one JSON file per host.
//!
//! Layout: `{root}/bt/{sha1(host)}.cookie`. Writes go to a sibling temp file
//! that is renamed over the target, so a crash mid-write leaves the previous
//! jar intact.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use btpanel_core::{cookie_path, CookieJar, SessionStore};
use btpanel_domain::{PanelError, Result};
use tracing::{debug, info};

use crate::errors::InfraError;

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    root: PathBuf,
}

impl FileSessionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the jar for `host` lives on disk.
    pub fn path_for(&self, host: &str) -> PathBuf {
        cookie_path(&self.root, host)
    }
}

fn session_err<E>(err: E) -> PanelError
where
    InfraError: From<E>,
{
    PanelError::from(InfraError::from(err))
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self, host: &str) -> Result<CookieJar> {
        let path = self.path_for(host);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "session.missing");
                return Ok(CookieJar::new());
            }
            Err(err) => return Err(session_err(err)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(CookieJar::new());
        }

        let jar: CookieJar = serde_json::from_slice(&bytes).map_err(session_err)?;
        debug!(path = %path.display(), cookies = jar.len(), "session.loaded");
        Ok(jar)
    }

    async fn save(&self, host: &str, jar: &CookieJar) -> Result<()> {
        let path = self.path_for(host);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(session_err)?;
        }

        let bytes = serde_json::to_vec(jar).map_err(session_err)?;
        let tmp = path.with_extension("cookie.tmp");
        tokio::fs::write(&tmp, &bytes).await.map_err(session_err)?;
        tokio::fs::rename(&tmp, &path).await.map_err(session_err)?;

        info!(path = %path.display(), cookies = jar.len(), "session.saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use btpanel_domain::ErrorKind;
    use tempfile::TempDir;

    use super::*;

    const HOST: &str = "https://127.0.0.1:8888";

    #[tokio::test]
    async fn missing_file_loads_empty_jar() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());

        let jar = store.load(HOST).await.unwrap();
        assert!(jar.is_empty());
        assert!(!store.path_for(HOST).exists());
    }

    #[tokio::test]
    async fn save_creates_directories_and_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested"));

        let mut jar = CookieJar::new();
        jar.insert("SESSIONID", "abc");
        store.save(HOST, &jar).await.unwrap();

        let expected = dir
            .path()
            .join("nested/bt/3c01d5a75955f4ee9ee2ae2229f6a2a8c5cba902.cookie");
        assert!(expected.exists());
        assert!(!expected.with_extension("cookie.tmp").exists());
        assert_eq!(store.load(HOST).await.unwrap(), jar);
    }

    #[tokio::test]
    async fn hosts_do_not_share_jars() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());

        let mut jar = CookieJar::new();
        jar.insert("SESSIONID", "a");
        store.save("https://a:8888", &jar).await.unwrap();

        assert!(store.load("https://b:8888").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_session_error() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path());
        let path = store.path_for(HOST);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"not json").unwrap();

        let err = store.load(HOST).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Session);
    }
}
