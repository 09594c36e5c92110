use http::StatusCode;
use thiserror::Error;

use super::form::Payload;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Form endpoint answered with status {0}")]
    Status(u16),
    #[error("Couldn't reach form endpoint: {0}")]
    Network(String),
    #[error("Couldn't encode inquiry: {0}")]
    Encode(String),
    #[error("No browser transport available")]
    Unavailable,
}

/// Delivers a cleaned inquiry somewhere. One call is one attempt; retrying is
/// up to the visitor.
#[allow(async_fn_in_trait)]
pub trait Relay {
    async fn deliver(&self, payload: &Payload) -> Result<(), RelayError>;
}

/// Only 2xx counts as delivered.
pub fn is_success(status: u16) -> bool {
    StatusCode::from_u16(status).is_ok_and(|s| s.is_success())
}

/// JSON `POST` to a hosted form service (Formspree) using the browser's fetch.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Relay for HttpRelay {
    async fn deliver(&self, payload: &Payload) -> Result<(), RelayError> {
        #[cfg(feature = "hydrate")]
        {
            // `json` sets Content-Type: application/json
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Accept", "application/json")
                .json(payload)
                .map_err(|e| RelayError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| RelayError::Network(e.to_string()))?;
            let status = resp.status();
            if is_success(status) {
                Ok(())
            } else {
                Err(RelayError::Status(status))
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(RelayError::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(300));
        assert!(!is_success(422));
        assert!(!is_success(500));
        // opaque responses and nonsense codes
        assert!(!is_success(0));
        assert!(!is_success(1200));
    }

    #[cfg(not(feature = "hydrate"))]
    #[tokio::test]
    async fn test_http_relay_unavailable_off_browser() {
        let relay = HttpRelay::new("https://formspree.io/f/test");
        assert_eq!(relay.endpoint(), "https://formspree.io/f/test");
        let payload = Payload {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            message: "1234567890".to_string(),
        };
        assert_eq!(relay.deliver(&payload).await, Err(RelayError::Unavailable));
    }
}
