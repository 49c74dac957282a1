//! Per-host session state
//!
//! Each remote host gets its own cookie jar, identified by the SHA-1 of the
//! configured host string so two clients aimed at different panels never
//! share a session.

pub mod jar;
pub mod ports;

use std::path::{Path, PathBuf};

use btpanel_domain::constants::{COOKIE_FILE_EXTENSION, SESSION_SUBDIR};
use sha1::{Digest, Sha1};

pub use jar::CookieJar;
pub use ports::SessionStore;

/// Stable session key for a host: lowercase hex SHA-1 of the host string.
pub fn session_key(host: &str) -> String {
    hex::encode(Sha1::digest(host.as_bytes()))
}

/// `{session_dir}/bt/{sha1(host)}.cookie`
pub fn cookie_path(session_dir: &Path, host: &str) -> PathBuf {
    session_dir
        .join(SESSION_SUBDIR)
        .join(format!("{}.{COOKIE_FILE_EXTENSION}", session_key(host)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_fixture() {
        assert_eq!(
            session_key("https://127.0.0.1:8888"),
            "3c01d5a75955f4ee9ee2ae2229f6a2a8c5cba902"
        );
    }

    #[test]
    fn test_cookie_path_layout() {
        let path = cookie_path(Path::new("/var/lib/app"), "https://127.0.0.1:8888");
        assert_eq!(
            path,
            PathBuf::from("/var/lib/app/bt/3c01d5a75955f4ee9ee2ae2229f6a2a8c5cba902.cookie")
        );
    }

    #[test]
    fn test_distinct_hosts_get_distinct_paths() {
        let dir = Path::new("/tmp/sessions");
        let hosts = [
            "https://127.0.0.1:8888",
            "https://127.0.0.1:8889",
            "http://127.0.0.1:8888",
            "https://panel.example.com",
            "https://panel.example.com/",
        ];
        let paths: std::collections::HashSet<_> =
            hosts.iter().map(|h| cookie_path(dir, h)).collect();
        assert_eq!(paths.len(), hosts.len());
    }

    #[test]
    fn test_same_host_same_path() {
        let dir = Path::new("/tmp/sessions");
        assert_eq!(cookie_path(dir, "https://a"), cookie_path(dir, "https://a"));
    }
}
