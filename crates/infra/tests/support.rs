use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use btpanel_core::cookie_path;
use btpanel_domain::PanelConfig;
use btpanel_infra::PanelClient;
use tempfile::TempDir;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::MockServer;

pub const TEST_KEY: &str = "integration-test-key";

/// Mock panel plus a private session directory, both alive for one test.
pub struct TestPanel {
    pub server: MockServer,
    session_dir: TempDir,
}

impl TestPanel {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let session_dir = TempDir::new().expect("temp dir should be created");
        Self { server, session_dir }
    }

    pub fn config(&self) -> PanelConfig {
        PanelConfig::new(self.server.uri(), TEST_KEY, self.session_dir.path())
    }

    pub fn client(&self) -> PanelClient {
        PanelClient::new(self.config()).expect("panel client should build")
    }

    pub fn session_dir(&self) -> &Path {
        self.session_dir.path()
    }

    /// Where the cookie jar for this panel is written.
    pub fn cookie_file(&self) -> PathBuf {
        cookie_path(self.session_dir.path(), &self.server.uri())
    }

    pub fn read_cookie_file(&self) -> Option<String> {
        std::fs::read_to_string(self.cookie_file()).ok()
    }
}

/// Form body of a recorded request, decoded into pairs.
pub fn form_pairs(request: &wiremock::Request) -> Vec<(String, String)> {
    url::form_urlencoded::parse(&request.body).into_owned().collect()
}

pub fn form_value(request: &wiremock::Request, key: &str) -> Option<String> {
    form_pairs(request).into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Handle for inspecting formatted log output captured during a test.
#[derive(Clone, Default)]
pub struct LogHandle {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogHandle {
    pub fn output(&self) -> String {
        let guard = self.buffer.lock().expect("log mutex poisoned");
        String::from_utf8_lossy(&guard).into_owned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.output().contains(needle)
    }
}

impl io::Write for LogHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().expect("log mutex poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogHandle {
    type Writer = LogHandle;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Capture every tracing event on the current thread until the guard drops.
pub fn capture_logs() -> (LogHandle, DefaultGuard) {
    let handle = LogHandle::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(handle.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (handle, guard)
}
