//! # View
//!
//! `render()` turns a session into the text the user sees. It is pure: the
//! same session always renders to the same string, so the TUI can call it on
//! every frame and `main` can call it once more to print the final result.

use reqwest::StatusCode;

use crate::core::state::Session;

pub fn render(session: &Session) -> String {
    if let Some(err) = &session.error {
        return format!("\nWe had some trouble: {err}\n\n");
    }

    let mut line = format!("Checking {} ...", session.target);

    if let Some(code) = session.status.filter(|code| *code > 0) {
        match reason_phrase(code) {
            Some(reason) => line.push_str(&format!(" {code} {reason}!")),
            None => line.push_str(&format!(" {code}!")),
        }
    }

    format!("\n{line}\n\n")
}

/// Standard reason phrase for a status code, e.g. `404` → `"Not Found"`.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
}
