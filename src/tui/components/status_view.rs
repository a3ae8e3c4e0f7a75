//! # StatusView Component
//!
//! Shows the output of `core::view::render()` for the current session.
//! The text itself is never altered here, only colored: red once an error is
//! set, green once a status code is in, default while the probe is running.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::state::Session;
use crate::core::view::render;
use crate::tui::component::Component;

pub struct StatusView<'a> {
    pub session: &'a Session,
}

impl<'a> StatusView<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    fn style(&self) -> Style {
        if self.session.error.is_some() {
            Style::default().fg(Color::Red)
        } else if self.session.status.is_some() {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        }
    }
}

impl Component for StatusView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(render(self.session))
            .style(self.style())
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::probe::ProbeError;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(session: &Session) -> (String, Terminal<TestBackend>) {
        let backend = TestBackend::new(60, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| StatusView::new(session).render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (text, terminal)
    }

    #[test]
    fn test_status_view_shows_checking_line() {
        let session = Session::new("https://charm.sh/");
        let (text, _) = draw(&session);
        assert!(text.contains("Checking https://charm.sh/ ..."));
    }

    #[test]
    fn test_status_view_shows_status_in_green() {
        let mut session = Session::new("https://charm.sh/");
        update(&mut session, Action::ProbeSucceeded(200));
        let (text, terminal) = draw(&session);

        assert!(text.contains("200 OK!"));
        // Row 0 is the leading blank line; the status line is row 1
        assert_eq!(terminal.backend().buffer()[(0, 1)].fg, Color::Green);
    }

    #[test]
    fn test_status_view_shows_error_in_red() {
        let mut session = Session::new("https://charm.sh/");
        update(
            &mut session,
            Action::ProbeFailed(ProbeError::Connect("dns error".to_string())),
        );
        let (text, terminal) = draw(&session);

        assert!(text.contains("We had some trouble: connection failed: dns error"));
        assert_eq!(terminal.backend().buffer()[(0, 1)].fg, Color::Red);
    }
}
