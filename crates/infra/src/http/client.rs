use std::time::Duration;

use btpanel_domain::{PanelError, Result};
use reqwest::{Client as ReqwestClient, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

const USER_AGENT: &str = concat!("btpanel/", env!("CARGO_PKG_VERSION"));

/// Thin async HTTP client for panel calls.
///
/// Requests are sent exactly once; the panel API is not idempotent
/// (create/delete calls) so nothing here retries.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a POST request builder for `url`.
    pub fn post<U>(&self, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.post(url)
    }

    /// Send the request with an overall deadline of `timeout`.
    ///
    /// The deadline covers connect, send and headers; use [`Self::read_text`]
    /// with the same value so reading the body is bounded too.
    pub async fn send(&self, builder: RequestBuilder, timeout: Duration) -> Result<Response> {
        let request = builder.timeout(timeout).build().map_err(map_reqwest)?;

        let method = request.method().clone();
        let url = request.url().clone();
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        debug!(%method, %url, timeout_ms, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) if err.is_timeout() => {
                debug!(%method, %url, "HTTP request timed out");
                Err(PanelError::Timeout(timeout))
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(map_reqwest(err))
            }
        }
    }

    /// Read the full response body as text.
    pub async fn read_text(response: Response, timeout: Duration) -> Result<String> {
        response.text().await.map_err(|err| {
            if err.is_timeout() {
                PanelError::Timeout(timeout)
            } else {
                map_reqwest(err)
            }
        })
    }
}

fn map_reqwest(err: reqwest::Error) -> PanelError {
    let infra: InfraError = err.into();
    PanelError::from(infra)
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    accept_invalid_certs: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        // Panels ship with self-signed certificates.
        Self { accept_invalid_certs: true }
    }
}

impl HttpClientBuilder {
    /// Accept self-signed or mismatched TLS certificates. On by default.
    pub fn accept_invalid_certs(mut self, enabled: bool) -> Self {
        self.accept_invalid_certs = enabled;
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let client = ReqwestClient::builder()
            .no_proxy()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()
            .map_err(map_reqwest)?;

        Ok(HttpClient { client })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use btpanel_domain::ErrorKind;
    use reqwest::StatusCode;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn sends_form_post_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/system"))
            .and(body_string_contains("action=GetSystemTotal"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        let builder =
            client.post(format!("{}/system", server.uri())).form(&[("action", "GetSystemTotal")]);
        let response = client.send(builder, Duration::from_secs(5)).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = HttpClient::read_text(response, Duration::from_secs(5)).await.unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn default_builder_accepts_invalid_certs() {
        assert!(HttpClientBuilder::default().accept_invalid_certs);
        assert!(HttpClient::builder().accept_invalid_certs);
        assert!(!HttpClient::builder().accept_invalid_certs(false).accept_invalid_certs);
    }

    #[tokio::test]
    async fn verifying_client_still_reaches_plain_http() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::builder().accept_invalid_certs(false).build().unwrap();
        let response =
            client.send(client.post(server.uri()), Duration::from_secs(5)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn does_not_retry_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        let response =
            client.send(client.post(server.uri()), Duration::from_secs(5)).await.expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn slow_response_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        let timeout = Duration::from_millis(50);
        let result = client.send(client.post(server.uri()), timeout).await;

        match result {
            Err(PanelError::Timeout(elapsed)) => assert_eq!(elapsed, timeout),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new().expect("http client");
        let err = client
            .send(client.post(format!("http://{addr}")), Duration::from_secs(2))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
