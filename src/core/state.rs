//! # Session State
//!
//! Everything one run of statuscheck knows.
//!
//! ```text
//! Session
//! ├── target: String              // URL being checked
//! ├── status: Option<u16>         // HTTP status, once the probe answers
//! ├── error: Option<ProbeError>   // transport failure, if the probe fails
//! └── phase: Phase                // Init until the first deciding event
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.

use crate::probe::ProbeError;

/// Where the session is in its two-state lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the probe result or a quit key.
    #[default]
    Init,
    /// Terminal. Nothing mutates the session from here on.
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub target: String,
    pub status: Option<u16>,
    pub error: Option<ProbeError>,
    pub phase: Phase,
}

impl Session {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            status: None,
            error: None,
            phase: Phase::Init,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}
