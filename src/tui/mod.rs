//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, spawns the probe, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! The loop waits on two sources at once:
//!
//! ```text
//!   probe task ──mpsc──┐
//!                      ├── select! ──► update() ──► draw
//!   EventStream ───────┘
//! ```
//!
//! Whichever yields a deciding event first wins. After `update()` returns
//! `Effect::Quit` the loop draws one final frame and returns; the probe task
//! is aborted if it is still in flight.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io;
use std::sync::Arc;

use crossterm::event::{Event, EventStream};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ProbeConfig;
use crate::core::state::Session;
use crate::probe::{HttpProber, Prober};
use crate::tui::event::{TuiEvent, translate};

/// Restores the terminal on every exit path, including early `?` returns.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// Run one interactive session against `config.url`.
///
/// Returns the finished session so the caller can print its final view after
/// the alternate screen is gone. Errors are terminal/runtime failures only;
/// probe failures are recorded in the returned session.
pub async fn run(config: ProbeConfig) -> io::Result<Session> {
    let prober: Arc<dyn Prober> = Arc::new(HttpProber::new(config.timeout));
    let mut session = Session::new(config.url);

    let mut terminal = ratatui::try_init()?;
    let _terminal_guard = TerminalGuard;
    info!("Terminal initialized");

    let mut events = EventStream::new();
    drive(&mut session, prober, &mut events, |session| {
        terminal.draw(|f| ui::draw_ui(f, session)).map(|_| ())
    })
    .await?;

    info!("Session finished: status={:?} error={:?}", session.status, session.error);
    Ok(session)
}

/// The session loop, independent of the real terminal.
///
/// `events` is the terminal input source and `draw` renders one frame. Both
/// are parameters so tests can script key presses and count frames.
pub async fn drive<E, D>(
    session: &mut Session,
    prober: Arc<dyn Prober>,
    events: &mut E,
    mut draw: D,
) -> io::Result<()>
where
    E: Stream<Item = io::Result<Event>> + Unpin,
    D: FnMut(&Session) -> io::Result<()>,
{
    // Capacity 1: the probe sends exactly one action
    let (tx, mut rx) = mpsc::channel::<Action>(1);
    let probe = spawn_probe(prober, session.target.clone(), tx);

    if let Err(e) = draw(session) {
        probe.abort();
        return Err(e);
    }

    let result = loop {
        if session.is_done() {
            break Ok(());
        }

        let action = tokio::select! {
            Some(action) = rx.recv() => action,
            next = events.next() => match next {
                Some(Ok(event)) => match translate(&event) {
                    Some(TuiEvent::Quit) => Action::Quit,
                    Some(TuiEvent::Resize) => {
                        if let Err(e) = draw(session) {
                            break Err(e);
                        }
                        continue;
                    }
                    None => continue,
                },
                Some(Err(e)) => break Err(e),
                None => {
                    break Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "terminal event stream closed",
                    ));
                }
            },
        };

        debug!("Event loop received: {:?}", action);
        if update(session, action) == Effect::Quit {
            break draw(session);
        }
    };

    probe.abort();
    result
}

fn spawn_probe(prober: Arc<dyn Prober>, url: String, tx: mpsc::Sender<Action>) -> AbortHandle {
    info!("Spawning {} probe for {}", prober.name(), url);

    let handle = tokio::spawn(async move {
        let action = match prober.probe(&url).await {
            Ok(code) => Action::ProbeSucceeded(code),
            Err(err) => Action::ProbeFailed(err),
        };
        if tx.send(action).await.is_err() {
            warn!("Failed to send probe result: receiver dropped");
        }
    });

    handle.abort_handle()
}
