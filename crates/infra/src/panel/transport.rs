//! Signed, session-carrying transport
//!
//! One [`PanelTransport::post`] is: validate config, lock the host, load its
//! cookie jar, sign, POST, merge `Set-Cookie`, persist if changed, decode.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use btpanel_core::{decode, sign_now, CookieJar, PanelTransport, Payload, SessionStore};
use btpanel_domain::{Attachment, PanelConfig, PanelRequest, Params, Result};
use dashmap::DashMap;
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::http::HttpClient;

/// Production [`PanelTransport`]: reqwest over a [`SessionStore`].
pub struct SignedTransport {
    http: HttpClient,
    sessions: Arc<dyn SessionStore>,
    host_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SignedTransport {
    pub fn new(http: HttpClient, sessions: Arc<dyn SessionStore>) -> Self {
        Self { http, sessions, host_locks: DashMap::new() }
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    fn host_lock(&self, host: &str) -> Arc<Mutex<()>> {
        self.host_locks.entry(host.to_string()).or_default().clone()
    }

    fn build(
        &self,
        url: &str,
        jar: &CookieJar,
        params: &Params,
        attachment: Option<Attachment>,
    ) -> RequestBuilder {
        let mut builder = self.http.post(url);
        if let Some(cookie) = jar.header_value() {
            builder = builder.header(COOKIE, cookie);
        }

        match attachment {
            None => builder.form(&params.to_form_pairs()),
            Some(attachment) => {
                let form = params
                    .to_form_pairs()
                    .into_iter()
                    .fold(Form::new(), |form, (key, value)| form.text(key, value));
                let part = Part::bytes(attachment.bytes).file_name(attachment.file_name);
                builder.multipart(form.part(attachment.field, part))
            }
        }
    }
}

fn endpoint_url(host: &str, path: &str) -> String {
    format!("{}{}", host.trim_end_matches('/'), path)
}

fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}

#[async_trait]
impl PanelTransport for SignedTransport {
    async fn post(&self, config: &PanelConfig, request: PanelRequest) -> Result<Value> {
        config.validate()?;

        let PanelRequest { path, mut params, attachment, timeout } = request;
        let timeout = timeout.unwrap_or_else(|| config.timeout());
        let url = endpoint_url(&config.host, &path);

        let lock = self.host_lock(&config.host);
        let _guard = lock.lock().await;

        let mut jar = self.sessions.load(&config.host).await?;
        sign_now(&config.key).apply(&mut params);

        let multipart = attachment.is_some();
        let builder = self.build(&url, &jar, &params, attachment);

        let started = Instant::now();
        let response = self.http.send(builder, timeout).await?;
        let status = response.status();
        debug!(
            path = %path,
            status = status.as_u16(),
            multipart,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "panel.request.sent"
        );

        let cookies = set_cookie_headers(&response);
        if jar.merge_set_cookies(cookies.iter().map(String::as_str)) {
            self.sessions.save(&config.host, &jar).await?;
        }

        if !status.is_success() {
            warn!(path = %path, status = status.as_u16(), "panel.request.non_success_status");
        }

        let body = HttpClient::read_text(response, timeout).await?;
        decode(Payload::Raw(body))
    }
}
