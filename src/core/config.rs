//! # Configuration
//!
//! The probe target and timeout are fixed. There is no config file and no
//! environment lookup; `ProbeConfig` exists so the rest of the crate takes
//! its settings from one place, and so tests can aim the probe at a mock
//! server.

use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_URL: &str = "https://charm.sh/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Config Struct
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// URL the single GET request is sent to.
    pub url: String,
    /// Client-side timeout for the whole request.
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
