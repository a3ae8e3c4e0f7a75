//! # Actions
//!
//! Everything that can change a session becomes an `Action`.
//! Probe answered? That's `Action::ProbeSucceeded(code)`.
//! User pressed Ctrl+C? That's `Action::Quit`.
//!
//! The `update()` function takes the current session and an action,
//! mutates the session, and returns an `Effect` telling the loop what to do
//! next. No I/O happens here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```
//!
//! The first action to arrive decides the session. After that the session is
//! `Done` and every later action is dropped.

use log::debug;

use crate::core::state::{Phase, Session};
use crate::probe::ProbeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The server answered with this status code (any code, 4xx/5xx included).
    ProbeSucceeded(u16),
    /// The request never produced a response.
    ProbeFailed(ProbeError),
    /// A quit key was pressed.
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Stop dispatching, draw once more, and exit.
    Quit,
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    if session.phase == Phase::Done {
        debug!("Session already done, dropping {:?}", action);
        return Effect::None;
    }

    match action {
        Action::ProbeSucceeded(code) => session.status = Some(code),
        Action::ProbeFailed(err) => session.error = Some(err),
        Action::Quit => {}
    }

    session.phase = Phase::Done;
    Effect::Quit
}
