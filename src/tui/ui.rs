use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::Session;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, StatusView};

pub fn draw_ui(frame: &mut Frame, session: &Session) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1)]);
    let [main_area, help_area] = layout.areas(frame.area());

    StatusView::new(session).render(frame, main_area);
    HelpBar.render(frame, help_area);
}
