use std::error::Error;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

/// Transport-level failures. An HTTP response of any status is never one of
/// these; only a request that produced no response is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// No response within the client-side timeout.
    Timeout(Duration),
    /// DNS, TCP, or TLS failure while connecting.
    Connect(String),
    /// Any other failure sending the request or reading the response head.
    Request(String),
    /// The HTTP client itself could not be built.
    Client(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Timeout(after) => write!(f, "request timed out after {after:?}"),
            ProbeError::Connect(msg) => write!(f, "connection failed: {msg}"),
            ProbeError::Request(msg) => write!(f, "request failed: {msg}"),
            ProbeError::Client(msg) => write!(f, "could not build HTTP client: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Flattens an error and its `source()` chain into one line, so the root
/// cause ("Connection refused", "dns error") is not hidden behind a generic
/// top-level message.
pub fn cause_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let msg = cause.to_string();
        if !out.ends_with(&msg) {
            out.push_str(": ");
            out.push_str(&msg);
        }
        source = cause.source();
    }
    out
}

#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns the name of the prober.
    fn name(&self) -> &str;

    /// Sends one request to `url` and returns the response status code.
    async fn probe(&self, url: &str) -> Result<u16, ProbeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Wrapper(io::Error);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl Error for Wrapper {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_display_timeout_mentions_duration() {
        let err = ProbeError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "request timed out after 10s");

        let err = ProbeError::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "request timed out after 250ms");
    }

    #[test]
    fn test_display_variants() {
        assert_eq!(
            ProbeError::Connect("dns error".to_string()).to_string(),
            "connection failed: dns error"
        );
        assert_eq!(
            ProbeError::Request("bad header".to_string()).to_string(),
            "request failed: bad header"
        );
        assert_eq!(
            ProbeError::Client("no TLS backend".to_string()).to_string(),
            "could not build HTTP client: no TLS backend"
        );
    }

    #[test]
    fn test_cause_chain_includes_root_cause() {
        let err = Wrapper(io::Error::new(io::ErrorKind::ConnectionRefused, "Connection refused"));
        assert_eq!(cause_chain(&err), "error sending request: Connection refused");
    }

    #[test]
    fn test_cause_chain_skips_repeated_suffix() {
        let err = Wrapper(io::Error::other("error sending request"));
        assert_eq!(cause_chain(&err), "error sending request");
    }
}
