//! HTTP prober backed by reqwest.
//!
//! One GET, one client, no retries. The client is built per probe with the
//! configured timeout, which covers connecting, sending, and waiting for the
//! response head. The body is never read.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::probe::prober::cause_chain;
use crate::probe::{ProbeError, Prober};

pub struct HttpProber {
    timeout: Duration,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, err: reqwest::Error) -> ProbeError {
        if err.is_timeout() {
            ProbeError::Timeout(self.timeout)
        } else if err.is_connect() {
            ProbeError::Connect(cause_chain(&err))
        } else {
            ProbeError::Request(cause_chain(&err))
        }
    }
}

#[async_trait]
impl Prober for HttpProber {
    fn name(&self) -> &str {
        "http"
    }

    async fn probe(&self, url: &str) -> Result<u16, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ProbeError::Client(cause_chain(&e)))?;

        info!("Probing {} (timeout {:?})", url, self.timeout);

        let response = client.get(url).send().await.map_err(|e| {
            let err = self.classify(e);
            warn!("Probe of {} failed: {}", url, err);
            err
        })?;

        let status = response.status();
        debug!("Probe of {} answered {}", url, status);
        Ok(status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_prober_keeps_timeout() {
        let prober = HttpProber::new(Duration::from_secs(10));
        assert_eq!(prober.timeout(), Duration::from_secs(10));
        assert_eq!(prober.name(), "http");
    }

    #[tokio::test]
    async fn test_invalid_url_is_request_error() {
        let prober = HttpProber::new(Duration::from_secs(1));
        let result = prober.probe("not a url").await;
        assert!(matches!(result, Err(ProbeError::Request(_))));
    }
}
