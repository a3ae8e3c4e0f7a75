//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::probe::{ProbeError, Prober};

/// Answers immediately with a fixed outcome.
pub struct FixedProber(pub Result<u16, ProbeError>);

#[async_trait]
impl Prober for FixedProber {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn probe(&self, _url: &str) -> Result<u16, ProbeError> {
        self.0.clone()
    }
}

/// Never answers.
pub struct StalledProber;

#[async_trait]
impl Prober for StalledProber {
    fn name(&self) -> &str {
        "stalled"
    }

    async fn probe(&self, _url: &str) -> Result<u16, ProbeError> {
        std::future::pending().await
    }
}

/// Answers after a delay and records whether it got that far.
pub struct DelayedProber {
    pub delay: Duration,
    pub outcome: Result<u16, ProbeError>,
    pub finished: Arc<AtomicBool>,
}

impl DelayedProber {
    pub fn new(delay: Duration, outcome: Result<u16, ProbeError>) -> Self {
        Self {
            delay,
            outcome,
            finished: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait]
impl Prober for DelayedProber {
    fn name(&self) -> &str {
        "delayed"
    }

    async fn probe(&self, _url: &str) -> Result<u16, ProbeError> {
        tokio::time::sleep(self.delay).await;
        self.finished.store(true, Ordering::SeqCst);
        self.outcome.clone()
    }
}
