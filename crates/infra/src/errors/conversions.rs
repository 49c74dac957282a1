//! Conversions from external infrastructure errors into panel errors.

use btpanel_domain::PanelError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PanelError);

impl From<InfraError> for PanelError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PanelError> for InfraError {
    fn from(value: PanelError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPanelError {
    fn into_panel(self) -> PanelError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PanelError */
/* -------------------------------------------------------------------------- */

impl IntoPanelError for HttpError {
    fn into_panel(self) -> PanelError {
        if self.is_builder() {
            return PanelError::InvalidInput(format!("cannot build panel request: {self}"));
        }

        if self.is_timeout() {
            return PanelError::Transport(format!("HTTP request timed out: {self}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return PanelError::Transport(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return PanelError::Transport(format!("failed to read response body: {self}"));
        }

        PanelError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_panel())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → PanelError (session files) */
/* -------------------------------------------------------------------------- */

impl IntoPanelError for std::io::Error {
    fn into_panel(self) -> PanelError {
        PanelError::Session(format!("session file I/O failed ({:?}): {self}", self.kind()))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_panel())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → PanelError (session files) */
/* -------------------------------------------------------------------------- */

impl IntoPanelError for serde_json::Error {
    fn into_panel(self) -> PanelError {
        PanelError::Session(format!("session file is corrupt: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_panel())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use btpanel_domain::ErrorKind;
    use reqwest::Client;

    use super::*;

    #[tokio::test]
    async fn http_connection_refused_maps_to_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: PanelError = InfraError::from(error).into();
        assert_eq!(mapped.kind(), ErrorKind::Transport);
        assert!(mapped.to_string().contains("connection"));
    }

    #[test]
    fn io_error_maps_to_session_error() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let mapped: PanelError = InfraError::from(err).into();
        match mapped {
            PanelError::Session(msg) => assert!(msg.contains("PermissionDenied")),
            other => panic!("expected session error, got {:?}", other),
        }
    }

    #[test]
    fn corrupt_json_maps_to_session_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let mapped: PanelError = InfraError::from(err).into();
        assert_eq!(mapped.kind(), ErrorKind::Session);
    }
}
